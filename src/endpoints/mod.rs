pub mod albums;
pub mod search;
pub mod tracks;

use crate::client::Catalog;
use crate::endpoints::albums::*;
use crate::endpoints::search::*;
use crate::endpoints::tracks::*;

// Endpoint function namespaces

impl Catalog {
    pub const fn albums(&self) -> Albums {
        Albums(self)
    }

    pub const fn searches(&self) -> Search {
        Search(self)
    }

    pub const fn tracks(&self) -> Tracks {
        Tracks(self)
    }
}
