use serde::{Deserialize, Serialize};

/// A band and the albums it owns. Bands are seeded at startup and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub id: i32,
    pub name: String,

    #[serde(default)]
    pub albums: Vec<Album>,
}

/// An album inside a band's catalog. The owning band is not stored; it is
/// derived by scanning the band list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: i32,
    pub name: String,
}

impl Band {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            albums: Vec::new(),
        }
    }

    pub fn with_albums(mut self, albums: Vec<Album>) -> Self {
        self.albums = albums;
        self
    }
}

impl Album {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
