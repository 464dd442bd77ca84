//! Alpha-beta versus plain minimax on the same positions.
//!
//! Run with: `cargo bench -p minimax_engine`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use minimax_engine::MinimaxPlayer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use search_core::SearchConfig;
use tile_game::{Board, Direction, HeuristicWeights, Player};

fn corpus() -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(99);
    let mut board = Board::new_game(4, 4, &mut rng).expect("4x4 board");
    let mut boards = vec![board.clone()];
    for i in 0..24 {
        let direction = Direction::ALL[(i * 3) % Direction::ALL.len()];
        if let Some(next) = board.try_slide(direction) {
            board = next;
            board.spawn_random(&mut rng);
        }
        boards.push(board.clone());
    }
    boards
}

fn bench_pruning(c: &mut Criterion) {
    let boards = corpus();
    let mut group = c.benchmark_group("minimax/depth2");
    group.sample_size(10);
    for pruning in [true, false] {
        let config = SearchConfig::depth(2).with_seed(1).with_pruning(pruning);
        let mut player = MinimaxPlayer::new(HeuristicWeights::snake(), config);
        let label = if pruning { "alpha_beta" } else { "minimax" };
        group.bench_with_input(BenchmarkId::from_parameter(label), &boards, |b, boards| {
            b.iter(|| {
                let mut nodes = 0;
                for board in boards {
                    nodes += player.choose_move(board).map(|m| m.nodes).unwrap_or(0);
                }
                black_box(nodes)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pruning);
criterion_main!(benches);
