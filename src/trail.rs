use std::collections::VecDeque;

use ultraviolet::Vec3;

use crate::config::TrailConfig;
use crate::render::{fade, Color, SphereRenderer};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailNode {
    pub pos: Vec3,
    pub time_created: f32,
}

/// Recent position history of a body, oldest node first.
#[derive(Clone, Debug)]
pub struct Trail {
    nodes: VecDeque<TrailNode>,
    lifetime: f32,
    capacity: usize,
}

impl Trail {
    pub fn new(lifetime: f32, capacity: usize) -> Self {
        Self {
            nodes: VecDeque::with_capacity(capacity),
            lifetime,
            capacity,
        }
    }

    pub fn from_config(config: &TrailConfig) -> Self {
        Self::new(config.lifetime, config.capacity)
    }

    pub fn record(&mut self, pos: Vec3, time: f32) {
        if self.capacity == 0 {
            return;
        }
        while self.nodes.len() >= self.capacity {
            self.nodes.pop_front();
        }
        self.nodes.push_back(TrailNode {
            pos,
            time_created: time,
        });
    }

    /// Drops every node older than the trail lifetime.
    pub fn prune(&mut self, now: f32) {
        while let Some(front) = self.nodes.front() {
            if now - front.time_created > self.lifetime {
                self.nodes.pop_front();
            } else {
                break;
            }
        }
    }

    /// One segment per consecutive pair, fading out with age.
    pub fn draw<R: SphereRenderer + ?Sized>(&self, renderer: &mut R, color: Color, now: f32) {
        for (a, b) in self.nodes.iter().zip(self.nodes.iter().skip(1)) {
            let age = now - a.time_created;
            if age > self.lifetime {
                continue;
            }
            let life_left = if self.lifetime > 0.0 {
                1.0 - age / self.lifetime
            } else {
                1.0
            };
            renderer.draw_line(a.pos, b.pos, fade(color, life_left));
        }
    }

    pub fn nodes(&self) -> impl Iterator<Item = &TrailNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
