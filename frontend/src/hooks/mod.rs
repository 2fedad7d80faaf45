mod in_view;

pub use in_view::use_in_view;
