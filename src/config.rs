use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "faqsmith-gateway")]
#[command(about = "Rate-limited upload gateway for the FAQsmith AI service")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    // Base URL of the AI service that turns tickets into FAQs
    #[arg(long, env = "AI_DOMAIN")]
    pub ai_url: String,

    // Max requests allowed per client per window
    #[arg(long, default_value_t = 5)]
    pub rate_limit: u32,

    // Rate limit window in seconds
    #[arg(long, default_value_t = 3600)]
    pub rate_window: u64,

    // Max distinct clients tracked before the least recent is dropped
    #[arg(long, default_value_t = 500)]
    pub rate_capacity: usize,

    // Timeout for calls to the AI service in seconds
    #[arg(long, default_value_t = 120)]
    pub ai_timeout: u64,
}
