pub mod use_overlay_id;
