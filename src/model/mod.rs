pub mod album;
pub mod itunes;
pub mod track;

use serde::{Deserialize, Serialize};

// Deezer wraps every list in `{"data": [...]}`
#[derive(Debug, Serialize, Deserialize)]
pub struct DeezerItems<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> Default for DeezerItems<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}
