pub mod footer;
pub mod header;
pub mod helpers;
pub mod results_list;
pub mod search_box;
pub mod status;
