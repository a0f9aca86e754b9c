//! Guard AI: patrol between two posts, walk over to investigate noises.
//!
//! ```text
//! selector
//!   ├─ conditional(noise heard)
//!   │   └─ sequence
//!   │       ├─ log
//!   │       ├─ walk to noise   (Running while walking)
//!   │       ├─ wait(2)
//!   │       └─ clear noise
//!   └─ sequence
//!       ├─ walk to next post   (Running while walking)
//!       └─ swap posts
//! ```

use behavior_tree::{Status, Tree, TreeBuilder, TreeConfig, TreeError};

/// Blackboard for a single guard on a one-dimensional corridor.
#[derive(Debug, Clone)]
pub struct Guard {
    pub position: i32,
    pub posts: [i32; 2],
    pub next_post: usize,
    pub noise: Option<i32>,
    pub investigations: u32,
}

impl Guard {
    /// Starts at the first post, heading for the second.
    pub fn new(posts: [i32; 2]) -> Self {
        Self {
            position: posts[0],
            posts,
            next_post: 1,
            noise: None,
            investigations: 0,
        }
    }

    pub fn hear(&mut self, at: i32) {
        self.noise = Some(at);
    }
}

/// Moves one cell toward `target`; `Success` once standing on it.
fn step_toward(position: &mut i32, target: i32) -> Status {
    *position += (target - *position).signum();
    if *position == target {
        Status::Success
    } else {
        Status::Running
    }
}

#[rustfmt::skip]
pub fn build(guard: Guard, config: &TreeConfig) -> Result<Tree<Guard>, TreeError> {
    TreeBuilder::begin(guard)
        .selector()
            .conditional(|g: &Guard| g.noise.is_some())
                .sequence()
                    .log("noise heard, investigating")?
                    .action(|g: &mut Guard| match g.noise {
                        Some(at) => step_toward(&mut g.position, at),
                        None => Status::Failure,
                    })?
                    .wait(2)?
                    .action(|g: &mut Guard| {
                        g.noise = None;
                        g.investigations += 1;
                        Status::Success
                    })?
                .end_composite()?
            .sequence()
                .action(|g: &mut Guard| {
                    let post = g.posts[g.next_post];
                    step_toward(&mut g.position, post)
                })?
                .action(|g: &mut Guard| {
                    g.next_post = 1 - g.next_post;
                    Status::Success
                })?
            .end_composite()?
        .end_composite()?
        .build_with(config)
}
