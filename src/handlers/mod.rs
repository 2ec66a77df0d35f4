mod generate_faq;
mod health;
mod metrics;

pub use generate_faq::generate_faq_handler;
pub use health::health_handler;
pub use metrics::metrics_handler;
