pub mod game_service;
