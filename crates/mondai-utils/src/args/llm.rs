use clap::Args;
use url::Url;

#[derive(Debug, Clone, Args)]
pub struct LlmServices {
    #[arg(long, env = "MONDAI_LLM_SERVICE", required = false, help = "openai, gwdg or custom")]
    pub llm_service: Option<String>,
    #[arg(long, env = "MONDAI_LLM_KEY", required = false, hide_env_values = true)]
    pub llm_key: Option<String>,
    #[arg(long, env = "MONDAI_LLM_MODEL", required = false)]
    pub llm_model: Option<String>,
    #[arg(long, required = false, help = "API base of a custom OpenAI compatible service")]
    pub llm_base: Option<Url>,
    #[arg(long, default_value_t = 120, help = "Total timeout of one model call in seconds")]
    pub llm_timeout: u64,
}
