use std::{fmt::Debug, hash::Hash, marker::PhantomData};
use num_traits::Zero;


/// Directed connection `from -> to` with a non-negative weight
#[derive(Clone, Debug, PartialEq)]
pub struct DirectedEdge<V, C> {
    pub from: V,
    pub to: V,
    pub weight: C,
}

impl<V, C: Copy> DirectedEdge<V, C> {

    pub fn new(from: V, to: V, weight: C) -> Self {
        Self { from, to, weight }
    }

    pub fn from(&self) -> &V {
        &self.from
    }

    pub fn to(&self) -> &V {
        &self.to
    }

    pub fn weight(&self) -> C {
        self.weight
    }
}


/// Read-only view of a directed graph
/// The search algorithms query it on demand, the graph is never materialized.
/// Weights must be non-negative: negative weights are not detected and
/// only make the returned paths non-optimal.
pub trait DirectedGraph {
    type Vertex: Eq + Hash + Clone + Debug;
    type Cost: Zero + PartialOrd + Copy + Debug;

    /// Edges leaving `v`, an empty vec marks a dead end
    fn outgoing_edges(&self, v: &Self::Vertex) -> Vec<DirectedEdge<Self::Vertex, Self::Cost>>;

    /// Estimated remaining cost from `v` to `goal`, only used by A*
    /// Must be admissible and consistent for A* to return optimal paths.
    /// Defaults to zero, which turns A* into Dijkstra.
    fn guess_cost(&self, _v: &Self::Vertex, _goal: &Self::Vertex) -> Self::Cost {
        Zero::zero()
    }
}

impl<G: DirectedGraph + ?Sized> DirectedGraph for &G {
    type Vertex = G::Vertex;
    type Cost = G::Cost;

    fn outgoing_edges(&self, v: &Self::Vertex) -> Vec<DirectedEdge<Self::Vertex, Self::Cost>> {
        (**self).outgoing_edges(v)
    }

    fn guess_cost(&self, v: &Self::Vertex, goal: &Self::Vertex) -> Self::Cost {
        (**self).guess_cost(v, goal)
    }
}


/// Graph defined by closures
/// neighbors: returns iterator of neighbors + edge cost to the neighbor
/// heuristic: estimated cost from a node to the goal, zero unless set
pub struct FnGraph<V, C, NN, H> {
    neighbors: NN,
    heuristic: H,
    _marker: PhantomData<fn(&V) -> C>,
}

fn zero_heuristic<V, C: Zero>(_v: &V, _goal: &V) -> C {
    Zero::zero()
}

impl<V, C, NN> FnGraph<V, C, NN, fn(&V, &V) -> C>
where
    C: Zero,
{
    pub fn new<IT>(neighbors: NN) -> Self
    where
        NN: Fn(&V) -> IT,
        IT: IntoIterator<Item = (V, C)>,
    {
        Self {
            neighbors,
            heuristic: zero_heuristic::<V, C>,
            _marker: PhantomData,
        }
    }
}

impl<V, C, NN, H> FnGraph<V, C, NN, H> {

    /// Replace the heuristic used by A*
    pub fn with_heuristic<H2>(self, heuristic: H2) -> FnGraph<V, C, NN, H2>
    where
        H2: Fn(&V, &V) -> C,
    {
        FnGraph {
            neighbors: self.neighbors,
            heuristic,
            _marker: PhantomData,
        }
    }
}

impl<V, C, NN, IT, H> DirectedGraph for FnGraph<V, C, NN, H>
where
    V: Eq + Hash + Clone + Debug,
    C: Zero + PartialOrd + Copy + Debug,
    NN: Fn(&V) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (V, C)>,
    H: Fn(&V, &V) -> C,
{
    type Vertex = V;
    type Cost = C;

    fn outgoing_edges(&self, v: &V) -> Vec<DirectedEdge<V, C>> {
        (self.neighbors)(v)
            .into_iter()
            .map(|(to, weight)| DirectedEdge::new(v.clone(), to, weight))
            .collect()
    }

    fn guess_cost(&self, v: &V, goal: &V) -> C {
        (self.heuristic)(v, goal)
    }
}
