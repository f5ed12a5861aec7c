use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "Shopping Cart.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "shopping_cart_output.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};

    #[test]
    fn default_paths_are_the_fixed_filenames() {
        let config = Config::default();
        assert_eq!(config.input_path.to_str(), Some(DEFAULT_INPUT_PATH));
        assert_eq!(config.output_path.to_str(), Some(DEFAULT_OUTPUT_PATH));
    }
}
