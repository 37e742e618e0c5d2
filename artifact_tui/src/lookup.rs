//! Background lookups so the UI never blocks on the network

use artifact_core::catalog::{
    CreatureLookup, LeaderSkill, LookupError, MonsterDetail, MonsterListItem,
};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Monster record plus its resolved leader skill
#[derive(Debug, Clone)]
pub struct MonsterLookup {
    pub monster: MonsterDetail,
    pub leader_skill: Option<LeaderSkill>,
}

/// Finished lookup delivered to the UI thread
#[derive(Debug)]
pub enum LookupEvent {
    MonsterList(Result<Vec<MonsterListItem>, LookupError>),
    Monster {
        generation: u64,
        id: u32,
        result: Result<MonsterLookup, LookupError>,
    },
}

/// Runs lookups as tasks on a tokio runtime.
///
/// A new monster request aborts the one in flight. Every request also
/// bumps the generation, and [`LookupWorker::poll`] drops any response
/// that was already queued under an older one.
pub struct LookupWorker {
    lookup: Arc<dyn CreatureLookup>,
    runtime: Handle,
    sender: mpsc::UnboundedSender<LookupEvent>,
    receiver: mpsc::UnboundedReceiver<LookupEvent>,
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
}

async fn fetch_monster(
    lookup: &dyn CreatureLookup,
    id: u32,
) -> Result<MonsterLookup, LookupError> {
    let monster = lookup.monster(id).await?;
    let leader_skill = match lookup.leader_skill_of(&monster).await {
        Ok(skill) => skill,
        Err(e) => {
            tracing::warn!(id, error = %e, "could not resolve leader skill");
            None
        }
    };
    Ok(MonsterLookup { monster, leader_skill })
}

impl LookupWorker {
    pub fn new(lookup: Arc<dyn CreatureLookup>, runtime: Handle) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        LookupWorker {
            lookup,
            runtime,
            sender,
            receiver,
            generation: 0,
            in_flight: None,
        }
    }

    /// Fetch the awakened monster list
    pub fn request_monster_list(&self) {
        let lookup = Arc::clone(&self.lookup);
        let sender = self.sender.clone();
        self.runtime.spawn(async move {
            let result = lookup.awakened_monsters().await;
            // Receiver gone means the app is shutting down
            let _ = sender.send(LookupEvent::MonsterList(result));
        });
    }

    /// Fetch one monster, aborting any request still in flight
    pub fn request_monster(&mut self, id: u32) -> u64 {
        self.cancel();
        let generation = self.generation;
        let lookup = Arc::clone(&self.lookup);
        let sender = self.sender.clone();

        tracing::debug!(id, generation, "monster lookup started");
        self.in_flight = Some(self.runtime.spawn(async move {
            let result = fetch_monster(&*lookup, id).await;
            let _ = sender.send(LookupEvent::Monster { generation, id, result });
        }));
        generation
    }

    /// Abort the monster request in flight, if any
    pub fn cancel(&mut self) {
        self.generation += 1;
        if let Some(task) = self.in_flight.take() {
            if !task.is_finished() {
                tracing::debug!(generation = self.generation, "monster lookup aborted");
            }
            task.abort();
        }
    }

    /// Drain finished lookups without blocking, dropping stale ones
    pub fn poll(&mut self) -> Vec<LookupEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.receiver.try_recv() {
            match &event {
                LookupEvent::Monster { generation, id, .. } if *generation != self.generation => {
                    tracing::debug!(
                        id,
                        generation,
                        current = self.generation,
                        "dropped stale lookup"
                    );
                }
                _ => events.push(event),
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artifact_core::LocalCatalog;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::OnceLock;
    use std::thread;
    use std::time::{Duration, Instant};
    use tokio::runtime::Runtime;

    const CATALOG: &str = r#"{
        "monsters": [
            {"id": 1, "name": "Veromos", "awaken_level": 1, "element": "Dark", "speed": 100,
             "max_lvl_hp": 9225, "max_lvl_attack": 769, "max_lvl_defense": 758, "leader_skill": 7},
            {"id": 2, "name": "Bernard", "awaken_level": 1, "element": "Wind", "speed": 111,
             "max_lvl_hp": 10380, "max_lvl_attack": 417, "max_lvl_defense": 703, "leader_skill": null}
        ],
        "leader_skills": [
            {"id": 7, "attribute": "HP", "amount": 33, "area": "General", "element": null}
        ]
    }"#;

    fn runtime() -> &'static Runtime {
        static RUNTIME: OnceLock<Runtime> = OnceLock::new();
        RUNTIME.get_or_init(|| Runtime::new().unwrap())
    }

    fn catalog() -> LocalCatalog {
        LocalCatalog::from_json(CATALOG).unwrap()
    }

    fn worker() -> LookupWorker {
        LookupWorker::new(Arc::new(catalog()), runtime().handle().clone())
    }

    /// Catalog whose monster 1 takes a while to answer
    struct SlowCatalog {
        inner: LocalCatalog,
        slow_finished: Arc<AtomicBool>,
    }

    #[async_trait]
    impl CreatureLookup for SlowCatalog {
        async fn monster(&self, id: u32) -> Result<MonsterDetail, LookupError> {
            if id == 1 {
                tokio::time::sleep(Duration::from_millis(300)).await;
                self.slow_finished.store(true, Ordering::SeqCst);
            }
            self.inner.monster(id).await
        }

        async fn awakened_monsters(&self) -> Result<Vec<MonsterListItem>, LookupError> {
            self.inner.awakened_monsters().await
        }

        async fn leader_skills(&self) -> Result<Vec<LeaderSkill>, LookupError> {
            self.inner.leader_skills().await
        }
    }

    fn slow_worker() -> (LookupWorker, Arc<AtomicBool>) {
        let slow_finished = Arc::new(AtomicBool::new(false));
        let lookup = SlowCatalog {
            inner: catalog(),
            slow_finished: Arc::clone(&slow_finished),
        };
        (LookupWorker::new(Arc::new(lookup), runtime().handle().clone()), slow_finished)
    }

    /// Poll until `want` events arrived or the deadline passes
    fn collect(worker: &mut LookupWorker, want: usize) -> Vec<LookupEvent> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut events = Vec::new();
        while events.len() < want && Instant::now() < deadline {
            events.extend(worker.poll());
            thread::sleep(Duration::from_millis(5));
        }
        events
    }

    #[test]
    fn test_monster_lookup_resolves_leader() {
        let mut worker = worker();
        let generation = worker.request_monster(1);
        let events = collect(&mut worker, 1);
        match &events[..] {
            [LookupEvent::Monster { generation: g, id: 1, result: Ok(found) }] => {
                assert_eq!(*g, generation);
                assert_eq!(found.monster.name, "Veromos");
                assert_eq!(found.leader_skill.as_ref().map(|s| s.id), Some(7));
            }
            other => panic!("unexpected events: {:?}", other),
        }
    }

    #[test]
    fn test_superseded_request_is_aborted() {
        let (mut worker, slow_finished) = slow_worker();
        worker.request_monster(1);
        worker.request_monster(2);

        let events = collect(&mut worker, 1);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], LookupEvent::Monster { id: 2, .. }));

        // Well past the slow lookup's delay: it never ran to completion
        thread::sleep(Duration::from_millis(500));
        assert!(!slow_finished.load(Ordering::SeqCst));
        assert!(worker.poll().is_empty());
    }

    #[test]
    fn test_cancel_aborts_in_flight() {
        let (mut worker, slow_finished) = slow_worker();
        worker.request_monster(1);
        worker.cancel();
        thread::sleep(Duration::from_millis(500));
        assert!(!slow_finished.load(Ordering::SeqCst));
        assert!(worker.poll().is_empty());
    }

    #[test]
    fn test_stale_queued_response_is_dropped() {
        let mut worker = worker();
        worker.request_monster(1);
        // Let the first answer land in the channel before superseding it
        thread::sleep(Duration::from_millis(100));
        worker.request_monster(2);

        let events = collect(&mut worker, 1);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], LookupEvent::Monster { id: 2, .. }));
        thread::sleep(Duration::from_millis(50));
        assert!(worker.poll().is_empty());
    }

    #[test]
    fn test_errors_are_delivered() {
        let mut worker = worker();
        worker.request_monster(0);
        let events = collect(&mut worker, 1);
        assert!(matches!(
            events[..],
            [LookupEvent::Monster { result: Err(LookupError::InvalidId(0)), .. }]
        ));
    }

    #[test]
    fn test_monster_list() {
        let mut worker = worker();
        worker.request_monster_list();
        let events = collect(&mut worker, 1);
        match &events[..] {
            [LookupEvent::MonsterList(Ok(list))] => {
                let names: Vec<&str> = list.iter().map(|m| m.name.as_str()).collect();
                assert_eq!(names, vec!["Bernard", "Veromos"]);
            }
            other => panic!("unexpected events: {:?}", other),
        }
    }
}
