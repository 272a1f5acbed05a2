use crate::core::board::CellSet;
use crate::core::coord::Coord;

/// What a shot source answers when asked for its next target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aim {
    Fire(Coord),
    /// The source gave up (e.g. a human closed the input); ends the match.
    Cancelled,
}

/// Anything that can pick targets for one side: a human at a terminal, a
/// random AI, a scripted test double. The turn engine only talks to sides
/// through this trait.
pub trait ShotSource<const N: usize> {
    /// Choose the next target. `excluded` holds the cells of the opposing
    /// board already fired upon.
    fn next_shot(&mut self, excluded: &CellSet<N>) -> Aim;

    /// Short name used in log lines.
    fn label(&self) -> &str {
        "player"
    }
}

impl<S, const N: usize> ShotSource<N> for Box<S>
where
    S: ShotSource<N> + ?Sized,
{
    fn next_shot(&mut self, excluded: &CellSet<N>) -> Aim {
        (**self).next_shot(excluded)
    }

    fn label(&self) -> &str {
        (**self).label()
    }
}
