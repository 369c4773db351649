//! Playlist content shown in the sidebar once a playlist is opened

use crate::api::Item;

#[derive(Clone, Debug)]
pub struct PlaylistDetail {
    pub id: String,
    pub name: String,
    pub tracks: Vec<Item>,
}
