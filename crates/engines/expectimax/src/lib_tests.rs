use super::*;
use search_core::SearchError;
use tile_game::Direction;

fn board(text: &str) -> Board {
    Board::parse(text).unwrap()
}

#[test]
fn expectimax_player_returns_legal_move() {
    let mut player = ExpectimaxPlayer::new(HeuristicWeights::snake(), SearchConfig::depth(1).with_seed(1));
    let b = board(
        "2 . . .
         . 4 . .
         . . . .
         . . 2 .",
    );
    let choice = player.choose_move(&b).unwrap();
    let direction = choice.direction.unwrap();
    assert!(b.legal_directions().contains(&direction));
    assert_eq!(choice.depth, 1);
    assert!(choice.nodes > 1);
}

#[test]
fn expectimax_player_handles_stuck_board() {
    let mut player = ExpectimaxPlayer::new(HeuristicWeights::snake(), SearchConfig::depth(2));
    let choice = player.choose_move(&board("2 4\n4 2")).unwrap();
    assert!(choice.direction.is_none());
}

#[test]
fn expectimax_player_merges_into_corner() {
    let mut player = ExpectimaxPlayer::new(HeuristicWeights::empty(), SearchConfig::depth(1).with_seed(3));
    let choice = player.choose_move(&board("2 2\n4 .")).unwrap();
    assert!(matches!(choice.direction, Some(Direction::Left) | Some(Direction::Right)));
}

#[test]
fn adaptive_player_searches_deeper_on_crowded_boards() {
    let controller = DepthController::for_area(16);
    let mut player = ExpectimaxPlayer::new(HeuristicWeights::snake(), SearchConfig::depth(1))
        .with_adaptive_depth(controller);
    assert_eq!(player.name(), "expectimax-adaptive");

    let sparse = board(
        "2 . . .
         . . . .
         . . . .
         . . . 2",
    );
    assert_eq!(player.choose_move(&sparse).unwrap().depth, 1);

    let crowded = board(
        "2 4 8 16
         4 8 16 32
         8 16 32 64
         . . 4 2",
    );
    assert_eq!(player.choose_move(&crowded).unwrap().depth, 3);
}

#[test]
fn invalid_depth_is_reported() {
    let mut player = ExpectimaxPlayer::new(HeuristicWeights::snake(), SearchConfig::depth(0));
    let err = player.choose_move(&board("2 .\n. .")).unwrap_err();
    assert_eq!(err, TileError::Search(SearchError::DepthConfiguration { depth: 0 }));
}
