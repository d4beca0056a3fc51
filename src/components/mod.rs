pub mod board_menu;
pub mod rating_summary;
pub mod review_form;
pub mod reviews_list;
pub mod star_rating;
