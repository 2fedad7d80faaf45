pub mod count_up;
pub mod stat_card;
pub mod typing_animation;
