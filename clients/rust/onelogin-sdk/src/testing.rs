//! Test doubles for code built on top of the SDK

use crate::error::{Error, Result};
use crate::repository::{Repository, ResourceDescriptor};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

type ReadFn = Box<dyn Fn(&ResourceDescriptor) -> Result<Vec<Vec<u8>>> + Send + Sync>;
type WriteFn = Box<dyn Fn(&ResourceDescriptor) -> Result<Vec<u8>> + Send + Sync>;

/// Per-operation call counters of a [`MockRepository`]
#[derive(Debug, Default)]
pub struct CallCounts {
    pub read: AtomicUsize,
    pub create: AtomicUsize,
    pub update: AtomicUsize,
    pub destroy: AtomicUsize,
}

impl CallCounts {
    /// Calls across all operations
    pub fn total(&self) -> usize {
        self.read.load(Ordering::SeqCst)
            + self.create.load(Ordering::SeqCst)
            + self.update.load(Ordering::SeqCst)
            + self.destroy.load(Ordering::SeqCst)
    }
}

/// Repository whose behavior is supplied per operation as closures
///
/// Operations without a closure fail with [`Error::Transport`].
#[derive(Default)]
pub struct MockRepository {
    read_fn: Option<ReadFn>,
    create_fn: Option<WriteFn>,
    update_fn: Option<WriteFn>,
    destroy_fn: Option<WriteFn>,
    calls: CallCounts,
    descriptors: Mutex<Vec<ResourceDescriptor>>,
}

impl std::fmt::Debug for MockRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockRepository")
            .field("calls", &self.calls)
            .finish_non_exhaustive()
    }
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_read<F>(mut self, f: F) -> Self
    where
        F: Fn(&ResourceDescriptor) -> Result<Vec<Vec<u8>>> + Send + Sync + 'static,
    {
        self.read_fn = Some(Box::new(f));
        self
    }

    pub fn with_create<F>(mut self, f: F) -> Self
    where
        F: Fn(&ResourceDescriptor) -> Result<Vec<u8>> + Send + Sync + 'static,
    {
        self.create_fn = Some(Box::new(f));
        self
    }

    pub fn with_update<F>(mut self, f: F) -> Self
    where
        F: Fn(&ResourceDescriptor) -> Result<Vec<u8>> + Send + Sync + 'static,
    {
        self.update_fn = Some(Box::new(f));
        self
    }

    pub fn with_destroy<F>(mut self, f: F) -> Self
    where
        F: Fn(&ResourceDescriptor) -> Result<Vec<u8>> + Send + Sync + 'static,
    {
        self.destroy_fn = Some(Box::new(f));
        self
    }

    /// Call counters
    pub fn calls(&self) -> &CallCounts {
        &self.calls
    }

    /// Every descriptor received, in call order
    pub fn descriptors(&self) -> Vec<ResourceDescriptor> {
        self.descriptors
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }

    fn record(&self, counter: &AtomicUsize, descriptor: &ResourceDescriptor) {
        counter.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut descriptors) = self.descriptors.lock() {
            descriptors.push(descriptor.clone());
        }
    }
}

fn not_mocked(operation: &str) -> Error {
    Error::Transport(format!("{} not mocked", operation))
}

#[async_trait]
impl Repository for MockRepository {
    async fn read(&self, descriptor: &ResourceDescriptor) -> Result<Vec<Vec<u8>>> {
        self.record(&self.calls.read, descriptor);
        match &self.read_fn {
            Some(f) => f(descriptor),
            None => Err(not_mocked("read")),
        }
    }

    async fn create(&self, descriptor: &ResourceDescriptor) -> Result<Vec<u8>> {
        self.record(&self.calls.create, descriptor);
        match &self.create_fn {
            Some(f) => f(descriptor),
            None => Err(not_mocked("create")),
        }
    }

    async fn update(&self, descriptor: &ResourceDescriptor) -> Result<Vec<u8>> {
        self.record(&self.calls.update, descriptor);
        match &self.update_fn {
            Some(f) => f(descriptor),
            None => Err(not_mocked("update")),
        }
    }

    async fn destroy(&self, descriptor: &ResourceDescriptor) -> Result<Vec<u8>> {
        self.record(&self.calls.destroy, descriptor);
        match &self.destroy_fn {
            Some(f) => f(descriptor),
            None => Err(not_mocked("destroy")),
        }
    }
}
