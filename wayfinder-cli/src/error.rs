use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] wayfinder_core::Error),
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("No dataset given: pass --dataset or set `dataset` in the configuration")]
    MissingDataset,
}
