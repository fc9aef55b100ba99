use serde::{Deserialize, Serialize};

/// A song referencing its album by id. The reference may dangle (no album
/// with that id exists); resolvers treat that as "no album" rather than an
/// error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: i32,
    pub name: String,

    #[serde(rename = "albumId")]
    pub album_id: i32,
}

impl Song {
    pub fn new(id: i32, name: impl Into<String>, album_id: i32) -> Self {
        Self {
            id,
            name: name.into(),
            album_id,
        }
    }
}
