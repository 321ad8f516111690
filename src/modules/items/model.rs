pub use snipstash_models::auth::MessageResponse;
pub use snipstash_models::items::*;
