use clap::Parser;

pub(crate) const DEFAULT_PROMPT: &str = "Hi, what is the meaning of life?";

#[derive(Parser)]
#[command(name = "gask")]
pub(crate) struct Cli {
    #[arg(long, default_value = DEFAULT_PROMPT)]
    pub(crate) prompt: String,
    /// Optional system instruction.
    #[arg(long)]
    pub(crate) system: Option<String>,
    #[arg(long, default_value = "gemini-2.5-flash")]
    pub(crate) model: String,
    /// Falls back to GEMINI_API_KEY when empty.
    #[arg(long, default_value = "")]
    pub(crate) api_key: String,
    #[arg(long)]
    pub(crate) base_url: Option<String>,
    #[arg(long)]
    pub(crate) proxy: Option<String>,
    #[arg(long, default_value_t = 60)]
    pub(crate) timeout_secs: u64,
    #[arg(long, default_value_t = 0.7)]
    pub(crate) temperature: f64,
    #[arg(long, default_value_t = 0.95)]
    pub(crate) top_p: f64,
    #[arg(long, default_value_t = 40)]
    pub(crate) top_k: u32,
    #[arg(long, default_value_t = 1024)]
    pub(crate) max_output_tokens: u32,
}
