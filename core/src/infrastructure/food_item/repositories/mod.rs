pub mod food_item_repository;
