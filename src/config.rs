use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

/// Settings for the Groq chat-completions API.
#[derive(Debug, Clone, Deserialize)]
pub struct GroqConfig {
    pub api_key: String,
    pub model: String,
}

/// Settings for the JSearch job-search API on RapidAPI.
#[derive(Debug, Clone, Deserialize)]
pub struct JobSearchConfig {
    pub api_key: String,
    pub host: String,
    pub country: String,
    pub date_posted: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub groq: GroqConfig,
    pub jobs: JobSearchConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "sentibot".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "sentibot-users".into()),
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60 * 24),
        };
        let groq = GroqConfig {
            api_key: std::env::var("GROQ_API_KEY")?,
            model: std::env::var("GROQ_MODEL").unwrap_or_else(|_| "llama-3.1-8b-instant".into()),
        };
        let jobs = JobSearchConfig {
            api_key: std::env::var("RAPID_API_KEY")?,
            host: std::env::var("JSEARCH_HOST")
                .unwrap_or_else(|_| "jsearch.p.rapidapi.com".into()),
            country: std::env::var("JOBS_COUNTRY").unwrap_or_else(|_| "in".into()),
            date_posted: std::env::var("JOBS_DATE_POSTED").unwrap_or_else(|_| "month".into()),
        };
        Ok(Self {
            database_url,
            jwt,
            groq,
            jobs,
        })
    }
}
