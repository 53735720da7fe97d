pub mod maps_keys;
pub mod web_client_id;
pub mod web_maps;
