//! Game actions over the piece queue and the reserve stack
//!
//! Any action that takes a piece out of the queue puts exactly one freshly
//! generated piece back at the end, so outside an action the queue is always
//! full. A rejected action changes nothing: no container mutation, no refill,
//! no id consumed.

use crate::factory::PieceFactory;
use crate::mode::SupplyMode;
use crate::piece::Piece;
use crate::queue::PieceQueue;
use crate::reserve::ReserveStack;
use std::fmt;
use tracing::{debug, info, warn};

/// Actions the core can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Consume the front of the queue
    Play,
    /// Generate a piece straight into the back of the queue
    Insert,
    /// Move the front of the queue onto the reserve stack
    Reserve,
    /// Consume the top of the reserve stack
    UseReserved,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Play => "Play",
            Action::Insert => "Insert",
            Action::Reserve => "Reserve",
            Action::UseReserved => "Use reserved",
        }
    }
}

/// Why an action was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    QueueEmpty,
    QueueFull,
    StackFull,
    StackEmpty,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RejectReason::QueueEmpty => "piece queue is empty",
            RejectReason::QueueFull => "piece queue is full",
            RejectReason::StackFull => "reserve stack is full",
            RejectReason::StackEmpty => "reserve stack is empty",
        };
        f.write_str(text)
    }
}

/// Result of one action, reported as data to the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success {
        action: Action,
        /// The piece the action played, inserted, reserved or used
        piece: Piece,
        /// Replacement generated at the back of the queue, if any
        refill: Option<Piece>,
    },
    Rejected {
        action: Action,
        reason: RejectReason,
    },
}

impl Outcome {
    pub fn action(&self) -> Action {
        match self {
            Outcome::Success { action, .. } | Outcome::Rejected { action, .. } => *action,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// The piece acted on, when the action went through
    pub fn piece(&self) -> Option<Piece> {
        match self {
            Outcome::Success { piece, .. } => Some(*piece),
            Outcome::Rejected { .. } => None,
        }
    }

    /// Replacement piece that joined the queue, if any
    pub fn refill(&self) -> Option<Piece> {
        match self {
            Outcome::Success { refill, .. } => *refill,
            Outcome::Rejected { .. } => None,
        }
    }

    fn rejected(action: Action, reason: RejectReason) -> Self {
        info!(action = action.name(), %reason, "action rejected");
        Outcome::Rejected { action, reason }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success { action, piece, refill } => {
                match action {
                    Action::Play => write!(f, "Played {piece}, removed from the front of the queue")?,
                    Action::Insert => write!(f, "Inserted {piece} at the back of the queue")?,
                    Action::Reserve => write!(f, "Reserved {piece}, moved to the top of the stack")?,
                    Action::UseReserved => write!(f, "Used reserved {piece}, removed from the stack")?,
                }
                if let Some(refill) = refill {
                    write!(f, "; {refill} joins the queue")?;
                }
                Ok(())
            }
            Outcome::Rejected { action, reason } => {
                write!(f, "{} cancelled: {reason}", action.name())
            }
        }
    }
}

/// Generate one piece and put it at the back of the queue.
/// Only called right after a successful dequeue, so there is always room.
fn refill_queue(queue: &mut PieceQueue, factory: &mut PieceFactory) -> Option<Piece> {
    let piece = factory.generate();
    match queue.enqueue(piece) {
        Ok(()) => Some(piece),
        Err(e) => {
            warn!(%piece, queue_len = queue.len(), "refill dropped: {}", e);
            None
        }
    }
}

/// Play the front piece and refill the queue
pub fn play(queue: &mut PieceQueue, factory: &mut PieceFactory) -> Outcome {
    let Ok(piece) = queue.dequeue() else {
        return Outcome::rejected(Action::Play, RejectReason::QueueEmpty);
    };
    let refill = refill_queue(queue, factory);
    debug!(%piece, queue_len = queue.len(), "played");
    Outcome::Success {
        action: Action::Play,
        piece,
        refill,
    }
}

/// Generate a piece directly into the back of the queue
pub fn insert(queue: &mut PieceQueue, factory: &mut PieceFactory) -> Outcome {
    if queue.is_full() {
        return Outcome::rejected(Action::Insert, RejectReason::QueueFull);
    }
    let piece = factory.generate();
    if queue.enqueue(piece).is_err() {
        return Outcome::rejected(Action::Insert, RejectReason::QueueFull);
    }
    debug!(%piece, queue_len = queue.len(), "inserted");
    Outcome::Success {
        action: Action::Insert,
        piece,
        refill: None,
    }
}

/// Move the front piece onto the reserve stack and refill the queue
pub fn reserve(
    queue: &mut PieceQueue,
    stack: &mut ReserveStack,
    factory: &mut PieceFactory,
) -> Outcome {
    if stack.is_full() {
        return Outcome::rejected(Action::Reserve, RejectReason::StackFull);
    }
    let Ok(piece) = queue.dequeue() else {
        return Outcome::rejected(Action::Reserve, RejectReason::QueueEmpty);
    };
    if let Err(e) = stack.push(piece) {
        // Checked above; never reached with a single owner
        warn!(%piece, stack_len = stack.len(), "reserved piece lost: {}", e);
        return Outcome::rejected(Action::Reserve, RejectReason::StackFull);
    }
    let refill = refill_queue(queue, factory);
    debug!(%piece, stack_len = stack.len(), "reserved");
    Outcome::Success {
        action: Action::Reserve,
        piece,
        refill,
    }
}

/// Take the top piece off the reserve stack. The queue is not touched.
pub fn use_reserved(stack: &mut ReserveStack) -> Outcome {
    match stack.pop() {
        Ok(piece) => {
            debug!(%piece, stack_len = stack.len(), "used reserved");
            Outcome::Success {
                action: Action::UseReserved,
                piece,
                refill: None,
            }
        }
        Err(_) => Outcome::rejected(Action::UseReserved, RejectReason::StackEmpty),
    }
}

/// One supply session: factory, queue and (in reserve mode) the stack
#[derive(Debug, Clone)]
pub struct Game {
    mode: SupplyMode,
    factory: PieceFactory,
    queue: PieceQueue,
    reserve: Option<ReserveStack>,
}

impl Game {
    /// Create a game with a random seed
    pub fn new(mode: SupplyMode, queue_capacity: usize, reserve_capacity: usize) -> Self {
        Self::with_factory(mode, queue_capacity, reserve_capacity, PieceFactory::new())
    }

    /// Create a game with a fixed seed
    pub fn with_seed(
        mode: SupplyMode,
        queue_capacity: usize,
        reserve_capacity: usize,
        seed: u64,
    ) -> Self {
        Self::with_factory(
            mode,
            queue_capacity,
            reserve_capacity,
            PieceFactory::with_seed(seed),
        )
    }

    fn with_factory(
        mode: SupplyMode,
        queue_capacity: usize,
        reserve_capacity: usize,
        mut factory: PieceFactory,
    ) -> Self {
        let queue = PieceQueue::initialize(queue_capacity, &mut factory);
        let reserve = mode
            .has_reserve()
            .then(|| ReserveStack::new(reserve_capacity));
        info!(
            mode = mode.name(),
            queue_capacity,
            reserve_capacity = ?reserve.as_ref().map(ReserveStack::capacity),
            seed = factory.seed(),
            "game started"
        );
        Self {
            mode,
            factory,
            queue,
            reserve,
        }
    }

    pub fn mode(&self) -> SupplyMode {
        self.mode
    }

    /// Perform one action. Without a reserve stack, Reserve is refused as
    /// StackFull and UseReserved as StackEmpty.
    pub fn perform(&mut self, action: Action) -> Outcome {
        match action {
            Action::Play => play(&mut self.queue, &mut self.factory),
            Action::Insert => insert(&mut self.queue, &mut self.factory),
            Action::Reserve => match self.reserve.as_mut() {
                Some(stack) => reserve(&mut self.queue, stack, &mut self.factory),
                None => Outcome::rejected(action, RejectReason::StackFull),
            },
            Action::UseReserved => match self.reserve.as_mut() {
                Some(stack) => use_reserved(stack),
                None => Outcome::rejected(action, RejectReason::StackEmpty),
            },
        }
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn reserve(&self) -> Option<&ReserveStack> {
        self.reserve.as_ref()
    }

    /// Queue contents, front first
    pub fn snapshot_queue(&self) -> Vec<Piece> {
        self.queue.snapshot()
    }

    /// Reserve contents, top first; empty in queue-only mode
    pub fn snapshot_reserve(&self) -> Vec<Piece> {
        self.reserve
            .as_ref()
            .map(ReserveStack::snapshot)
            .unwrap_or_default()
    }

    /// Pieces generated since the game started
    pub fn pieces_issued(&self) -> u64 {
        self.factory.issued()
    }

    pub fn seed(&self) -> u64 {
        self.factory.seed()
    }
}
