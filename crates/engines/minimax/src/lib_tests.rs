use super::*;
use search_core::AdversaryModel;
use tile_game::Direction;

fn board(text: &str) -> Board {
    Board::parse(text).unwrap()
}

#[test]
fn minimax_player_returns_legal_move() {
    let mut player = MinimaxPlayer::new(HeuristicWeights::balanced(), SearchConfig::depth(2).with_seed(5));
    let b = board(
        "2 . . .
         . 4 . .
         . . 8 .
         . . . 2",
    );
    let choice = player.choose_move(&b).unwrap();
    assert!(b.legal_directions().contains(&choice.direction.unwrap()));
    assert_eq!(choice.depth, 2);
    assert_eq!(player.name(), "minimax-d2");
}

#[test]
fn minimax_player_handles_stuck_board() {
    let mut player = MinimaxPlayer::new(HeuristicWeights::snake(), SearchConfig::depth(1));
    let choice = player.choose_move(&board("2 4\n4 2")).unwrap();
    assert!(choice.direction.is_none());
}

#[test]
fn minimax_player_assumes_worst_spawn() {
    let mut player = MinimaxPlayer::new(HeuristicWeights::empty(), SearchConfig::depth(1).with_seed(2));
    let choice = player.choose_move(&board("2 2\n. .")).unwrap();
    assert!(matches!(choice.direction, Some(Direction::Left) | Some(Direction::Right)));
    assert_eq!(choice.value, 2.0);
}

#[test]
fn pruning_does_not_change_the_value() {
    let b = board(
        "2 4 . .
         . 8 2 .
         . . . .
         4 . . 2",
    );
    let mut pruned = MinimaxPlayer::new(HeuristicWeights::balanced(), SearchConfig::depth(2).with_seed(1));
    let mut plain = MinimaxPlayer::new(
        HeuristicWeights::balanced(),
        SearchConfig::depth(2).with_seed(1).with_pruning(false),
    );
    let a = pruned.choose_move(&b).unwrap();
    let p = plain.choose_move(&b).unwrap();
    assert_eq!(a.value, p.value);
    assert!(a.nodes < p.nodes);
}

#[test]
fn uniform_adversary_averages_spawns() {
    let config = SearchConfig::depth(1).with_adversary(AdversaryModel::Uniform);
    let mut player = MinimaxPlayer::new(HeuristicWeights::empty(), config);
    // After sliding left three cells are empty; every spawn leaves two.
    let choice = player.choose_move(&board("2 2\n. .")).unwrap();
    assert_eq!(choice.value, 2.0);
}
