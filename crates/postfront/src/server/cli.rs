use crate::upstream::UpstreamOptions;

#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "POSTFRONT_PORT", default_value = "8080")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "POSTFRONT_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[clap(flatten)]
    pub upstream: UpstreamOptions,
}
