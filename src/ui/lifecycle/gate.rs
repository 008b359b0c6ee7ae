use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use tokio::sync::oneshot;

/// Resolves when the first render has settled.
///
/// Handed to whoever schedules the post-settle effect; the orchestrating
/// [`FirstRenderGate`] fires it.
#[derive(Debug)]
pub struct SettleSignal {
    rx: oneshot::Receiver<()>,
}

impl SettleSignal {
    /// Wait for the signal. Returns false if the gate was dropped without
    /// ever settling.
    pub async fn settled(self) -> bool {
        self.rx.await.is_ok()
    }
}

/// Tracks the data dependencies suspended during the first render pass.
///
/// Dependencies are registered while the first pass runs, the pass is then
/// [`commit`](Self::commit)ted, and each dependency is
/// [`settle`](Self::settle)d as its data resolves. The paired
/// [`SettleSignal`] fires once the pass is committed and nothing is
/// outstanding; after that the gate ignores everything.
#[derive(Debug)]
pub struct FirstRenderGate<K> {
    outstanding: HashSet<K>,
    committed: bool,
    fire: Option<oneshot::Sender<()>>,
}

impl<K> FirstRenderGate<K>
where
    K: Eq + Hash + Debug,
{
    pub fn new() -> (Self, SettleSignal) {
        let (tx, rx) = oneshot::channel();
        let gate = Self {
            outstanding: HashSet::new(),
            committed: false,
            fire: Some(tx),
        };
        (gate, SettleSignal { rx })
    }

    /// Add a dependency of the first render. Returns false once the gate has
    /// fired; later suspensions belong to local boundaries.
    pub fn register(&mut self, dep: K) -> bool {
        if self.is_fired() {
            return false;
        }
        tracing::debug!(dependency = ?dep, "first render waits on dependency");
        self.outstanding.insert(dep);
        true
    }

    /// The first render pass is complete; nothing more will register.
    pub fn commit(&mut self) {
        self.committed = true;
        self.try_fire();
    }

    /// A dependency resolved.
    pub fn settle(&mut self, dep: &K) {
        if self.outstanding.remove(dep) {
            tracing::debug!(
                dependency = ?dep,
                remaining = self.outstanding.len(),
                "dependency settled"
            );
        }
        self.try_fire();
    }

    pub fn is_fired(&self) -> bool {
        self.fire.is_none()
    }

    pub fn outstanding(&self) -> usize {
        self.outstanding.len()
    }

    fn try_fire(&mut self) {
        if !self.committed || !self.outstanding.is_empty() {
            return;
        }
        if let Some(tx) = self.fire.take() {
            let _ = tx.send(());
        }
    }
}
