//! Explicit game trees shared by the integration tests.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::Rng;

use search_core::{AdversarialGame, AgentIndex, StochasticGame};

/// One node of an explicit tree. `value` is what the evaluator returns when
/// the node is a leaf or a cutoff.
#[derive(Debug, Clone, Default)]
pub struct TreeNode {
    pub children: Vec<usize>,
    pub value: f64,
    pub win: bool,
    pub lose: bool,
    /// Index into `children` of the "stand still" action, if any.
    pub stationary: Option<usize>,
}

/// Turn-taking game over an explicit tree. State is a node index; actions
/// are child indices. Node 0 is the root.
#[derive(Debug, Clone)]
pub struct TreeGame {
    pub nodes: Vec<TreeNode>,
    pub agents: usize,
}

/// Actions carry the parent so the stationary flag can be looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Branch {
    pub parent: usize,
    pub index: usize,
}

impl TreeGame {
    pub fn new(agents: usize) -> Self {
        Self {
            nodes: vec![TreeNode::default()],
            agents,
        }
    }

    pub fn add_child(&mut self, parent: usize, value: f64) -> usize {
        let id = self.nodes.len();
        self.nodes.push(TreeNode {
            value,
            ..Default::default()
        });
        self.nodes[parent].children.push(id);
        id
    }

    pub fn value_of(&self, node: usize) -> f64 {
        self.nodes[node].value
    }

    /// Full tree where every internal node has `branching` children and
    /// leaves sit `height` levels below the root. Values are random integers
    /// in [-50, 50] so ties happen.
    pub fn random(rng: &mut StdRng, agents: usize, height: u32, branching: usize) -> Self {
        let mut game = Self::new(agents);
        game.nodes[0].value = rng.gen_range(-50..=50) as f64;
        let mut frontier = vec![0usize];
        for _ in 0..height {
            let mut next = Vec::new();
            for parent in frontier {
                let width = rng.gen_range(1..=branching);
                for _ in 0..width {
                    let value = rng.gen_range(-50..=50) as f64;
                    next.push(game.add_child(parent, value));
                }
            }
            frontier = next;
        }
        game
    }

    /// Exact value of `node` when `agent` is to move, searching all the way
    /// to the leaves under the minimizing model.
    pub fn exact_value(&self, node: usize, agent: AgentIndex) -> f64 {
        let n = &self.nodes[node];
        if n.children.is_empty() || n.win || n.lose {
            return n.value;
        }
        let next = (agent + 1) % self.agents;
        let values = n.children.iter().map(|&c| self.exact_value(c, next));
        if agent == 0 {
            values.fold(f64::NEG_INFINITY, f64::max)
        } else {
            values.fold(f64::INFINITY, f64::min)
        }
    }
}

impl AdversarialGame for TreeGame {
    type State = usize;
    type Action = Branch;

    fn num_agents(&self, _state: &usize) -> usize {
        self.agents
    }

    fn legal_actions(&self, state: &usize, _agent: AgentIndex) -> Vec<Branch> {
        (0..self.nodes[*state].children.len())
            .map(|index| Branch {
                parent: *state,
                index,
            })
            .collect()
    }

    fn successor(&self, state: &usize, _agent: AgentIndex, action: Branch) -> usize {
        self.nodes[*state].children[action.index]
    }

    fn is_win(&self, state: &usize) -> bool {
        self.nodes[*state].win
    }

    fn is_lose(&self, state: &usize) -> bool {
        self.nodes[*state].lose
    }

    fn is_stationary(&self, action: &Branch) -> bool {
        self.nodes[action.parent].stationary == Some(action.index)
    }
}

/// Agent-versus-environment game over an explicit tree.
///
/// MAX nodes list their children in `max_children`. A chance node has
/// `positions` slots, and `chance_children[node][position][outcome]` is the
/// node reached when `outcome` lands on `position`.
#[derive(Debug, Clone)]
pub struct ChanceTree {
    pub values: Vec<f64>,
    pub max_children: Vec<Vec<usize>>,
    pub chance_children: Vec<Vec<Vec<usize>>>,
    pub distribution: Vec<(usize, f64)>,
    pub lose: Vec<bool>,
}

impl ChanceTree {
    pub fn new(distribution: Vec<(usize, f64)>) -> Self {
        Self {
            values: vec![0.0],
            max_children: vec![Vec::new()],
            chance_children: vec![Vec::new()],
            distribution,
            lose: vec![false],
        }
    }

    fn push_node(&mut self, value: f64) -> usize {
        self.values.push(value);
        self.max_children.push(Vec::new());
        self.chance_children.push(Vec::new());
        self.lose.push(false);
        self.values.len() - 1
    }

    /// Adds an agent move from `parent` leading to a fresh node.
    pub fn add_move(&mut self, parent: usize, value: f64) -> usize {
        let id = self.push_node(value);
        self.max_children[parent].push(id);
        id
    }

    /// Adds a position under chance node `parent` whose outcomes lead to
    /// fresh nodes with the given values (one per distribution entry).
    pub fn add_position(&mut self, parent: usize, values: &[f64]) -> Vec<usize> {
        let ids: Vec<usize> = values.iter().map(|&v| self.push_node(v)).collect();
        self.chance_children[parent].push(ids.clone());
        ids
    }

    /// Random tree of `moves` full agent+environment moves.
    pub fn random(rng: &mut StdRng, moves: u32, distribution: Vec<(usize, f64)>) -> Self {
        let outcomes = distribution.len();
        let mut tree = Self::new(distribution);
        tree.values[0] = rng.gen_range(-20.0..20.0);
        let mut frontier = vec![0usize];
        for _ in 0..moves {
            let mut chance_nodes = Vec::new();
            for parent in frontier {
                for _ in 0..rng.gen_range(1..=3) {
                    let value = rng.gen_range(-20.0..20.0);
                    chance_nodes.push(tree.add_move(parent, value));
                }
            }
            let mut next = Vec::new();
            for node in chance_nodes {
                for _ in 0..rng.gen_range(1..=3) {
                    let values: Vec<f64> = (0..outcomes).map(|_| rng.gen_range(-20.0..20.0)).collect();
                    next.extend(tree.add_position(node, &values));
                }
            }
            frontier = next;
        }
        tree
    }
}

impl StochasticGame for ChanceTree {
    type State = usize;
    type Action = usize;
    type Position = usize;
    type Outcome = usize;

    fn legal_actions(&self, state: &usize) -> Vec<usize> {
        (0..self.max_children[*state].len()).collect()
    }

    fn successor(&self, state: &usize, action: usize) -> usize {
        self.max_children[*state][action]
    }

    fn is_win(&self, _state: &usize) -> bool {
        false
    }

    fn is_lose(&self, state: &usize) -> bool {
        self.lose[*state]
    }

    fn eligible_positions(&self, state: &usize) -> Vec<usize> {
        (0..self.chance_children[*state].len()).collect()
    }

    fn outcomes(&self) -> &[(usize, f64)] {
        &self.distribution
    }

    fn place(&self, state: &usize, position: usize, outcome: usize) -> usize {
        self.chance_children[*state][position][outcome]
    }
}

/// A random distribution over `n` outcomes.
pub fn random_distribution(rng: &mut StdRng, n: usize) -> Vec<(usize, f64)> {
    let weights: Vec<f64> = (0..n).map(|_| rng.gen_range(0.05..1.0)).collect();
    let total: f64 = weights.iter().sum();
    weights.into_iter().enumerate().map(|(i, w)| (i, w / total)).collect()
}
