use super::core::*;
use super::generate::*;

fn strings(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

// ========== Game ==========

#[test]
fn test_new_sorts_genres() {
    let game = Game::new("Celeste", strings(&["Platformer", "Indie", "Action"]), 4.5, "PC");
    assert_eq!(game.genres(), ["Action", "Indie", "Platformer"]);
    assert_eq!(game.title(), "Celeste");
    assert_eq!(game.score(), 4.5);
    assert_eq!(game.platform(), "PC");
}

#[test]
fn test_same_genre_set_gives_same_sequence() {
    let a = Game::new("A", strings(&["RPG", "Action"]), 0.0, "PC");
    let b = Game::new("B", strings(&["Action", "RPG"]), 0.0, "PC");
    assert_eq!(a.genres(), b.genres());
}

#[test]
fn test_default_game() {
    let game = Game::default();
    assert_eq!(game.title(), "");
    assert_eq!(game.score(), 0.0);
    assert!(game.genres().is_empty());
    assert_eq!(game.platform(), "");
}

#[test]
fn test_set_genres_renormalizes() {
    let mut game = Game::new("Hades", strings(&["Action"]), 4.8, "PC");
    game.set_genres(strings(&["Roguelike", "Action", "Indie"]));
    assert_eq!(game.genres(), ["Action", "Indie", "Roguelike"]);
}

#[test]
fn test_setters_replace_fields() {
    let mut game = Game::default();
    game.set_title("Tetris");
    game.set_score(3.9);
    game.set_platform("Nintendo Switch");
    assert_eq!(game.title(), "Tetris");
    assert_eq!(game.score(), 3.9);
    assert_eq!(game.platform(), "Nintendo Switch");
}

#[test]
fn test_display_row() {
    let game = Game::new("Doom", strings(&["Shooter", "Action"]), 4.25, "PC");
    assert_eq!(game.to_string(), "Doom\t4.25\tAction,Shooter\tPC");
}

// ========== Generator ==========

#[test]
fn test_generate_count() {
    let mut rng = create_rng(Some(7));
    assert_eq!(generate_catalog(500, &mut rng).len(), 500);
    assert!(generate_catalog(0, &mut rng).is_empty());
}

#[test]
fn test_generate_reproducible_with_seed() {
    let a = generate_catalog(50, &mut create_rng(Some(42)));
    let b = generate_catalog(50, &mut create_rng(Some(42)));
    assert_eq!(a, b);
}

#[test]
fn test_generated_records_are_well_formed() {
    let catalog = generate_catalog(1000, &mut create_rng(Some(1)));
    for game in &catalog {
        let len = game.title().len();
        assert!((5..=25).contains(&len), "title length {}", len);
        assert!(game.title().bytes().all(|b| b.is_ascii_alphanumeric()));
        assert!((1.0..5.0).contains(&game.score()));
        assert!(PLATFORMS.contains(&game.platform()));
        assert!(game.genres().len() <= 3);
        assert!(game.genres().windows(2).all(|w| w[0] < w[1]));
        assert!(game.genres().iter().all(|g| GENRES.contains(&g.as_str())));
    }
}

#[test]
fn test_generated_catalog_has_empty_genre_lists() {
    let catalog = generate_catalog(1000, &mut create_rng(Some(3)));
    assert!(catalog.iter().any(|g| g.genres().is_empty()));
    assert!(catalog.iter().any(|g| !g.genres().is_empty()));
}
