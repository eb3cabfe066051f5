//! Driver behavior against a recording in-memory graph.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use twinload_build::config::{BuildConfig, RegistrationMode};
use twinload_build::driver::GraphBuilder;
use twinload_build::error::{BuildError, Operation};
use twinload_core::{ComponentTypeRequest, EntityRequest, Record, RELATIONSHIP_COMPONENT};
use twinload_graph::{ComponentTypeCreated, EntityCreated, GraphError, TwinGraph};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    ComponentType(ComponentTypeRequest),
    Entity(EntityRequest),
}

/// Records every call in arrival order and tracks how many are in flight.
#[derive(Default)]
struct RecordingGraph {
    calls: Mutex<Vec<Call>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    fail_entity: Option<String>,
    fail_component_type: bool,
}

impl RecordingGraph {
    fn failing_on(entity_name: &str) -> Self {
        Self {
            fail_entity: Some(entity_name.to_string()),
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn entities(&self) -> Vec<EntityRequest> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Entity(e) => Some(e),
                Call::ComponentType(_) => None,
            })
            .collect()
    }

    fn component_type_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::ComponentType(_)))
            .count()
    }
}

fn rejected(operation: &'static str) -> GraphError {
    GraphError::Service {
        operation,
        message: "ValidationException: rejected by test".to_string(),
    }
}

#[async_trait]
impl TwinGraph for RecordingGraph {
    async fn create_component_type(
        &self,
        request: &ComponentTypeRequest,
    ) -> Result<ComponentTypeCreated, GraphError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::ComponentType(request.clone()));
        if self.fail_component_type {
            return Err(rejected("CreateComponentType"));
        }
        Ok(ComponentTypeCreated {
            arn: format!("arn:test:{}", request.component_type_id),
            state: "CREATING".to_string(),
        })
    }

    async fn create_entity(&self, request: &EntityRequest) -> Result<EntityCreated, GraphError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        self.calls.lock().unwrap().push(Call::Entity(request.clone()));

        // Give any concurrently issued call a chance to overlap.
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.fail_entity.as_deref() == Some(request.entity_name.as_str()) {
            return Err(rejected("CreateEntity"));
        }
        let entity_id = request
            .entity_id
            .clone()
            .unwrap_or_else(|| format!("generated-{}", request.entity_name));
        Ok(EntityCreated {
            arn: format!("arn:test:{entity_id}"),
            entity_id,
            state: "ACTIVE".to_string(),
        })
    }
}

fn sample_records() -> Vec<Record> {
    vec![
        Record::new("site1", None, None),
        Record::new("building1", Some("site1"), Some("isChildOf")),
        Record::new("sensor1", Some("building1"), Some("monitors")),
    ]
}

fn builder(graph: &Arc<RecordingGraph>, registration: RegistrationMode) -> GraphBuilder<RecordingGraph> {
    GraphBuilder::new(graph.clone(), "factory", BuildConfig { registration })
}

#[tokio::test]
async fn test_sample_table_replays_in_order() {
    let graph = Arc::new(RecordingGraph::default());
    let summary = builder(&graph, RegistrationMode::Awaited)
        .run(&sample_records())
        .await
        .unwrap();

    assert_eq!(summary.entities_created, 3);

    let calls = graph.calls();
    assert_eq!(calls.len(), 4);
    assert_eq!(
        calls[0],
        Call::ComponentType(ComponentTypeRequest::relationship("factory"))
    );

    let entities = graph.entities();

    let site = &entities[0];
    assert_eq!(site.entity_id.as_deref(), Some("site1"));
    assert_eq!(site.entity_name, "site1");
    assert!(site.parent_entity_id.is_none());
    assert!(site.components.is_empty());

    let building = &entities[1];
    assert_eq!(building.entity_id.as_deref(), Some("building1"));
    assert_eq!(building.entity_name, "building1");
    assert_eq!(building.parent_entity_id.as_deref(), Some("site1"));
    assert!(building.components.is_empty());

    let sensor = &entities[2];
    assert!(sensor.entity_id.is_none());
    assert_eq!(sensor.entity_name, "sensor1");
    assert!(sensor.parent_entity_id.is_none());
    let component = &sensor.components[RELATIONSHIP_COMPONENT];
    assert_eq!(component.component_type_id, "relationship");
    assert_eq!(component.properties.len(), 1);
    assert_eq!(component.properties["monitors"].targets, vec!["building1"]);

    for entity in &entities {
        assert_eq!(entity.workspace_id, "factory");
    }
}

#[tokio::test]
async fn test_entities_are_never_concurrent() {
    let graph = Arc::new(RecordingGraph::default());
    let records: Vec<Record> = (0..20)
        .map(|i| Record::new(&format!("node{i}"), None, None))
        .collect();

    builder(&graph, RegistrationMode::Awaited)
        .run(&records)
        .await
        .unwrap();

    assert_eq!(graph.max_in_flight.load(Ordering::SeqCst), 1);
    let names: Vec<String> = graph.entities().into_iter().map(|e| e.entity_name).collect();
    let expected: Vec<String> = (0..20).map(|i| format!("node{i}")).collect();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn test_registers_once_without_records() {
    let graph = Arc::new(RecordingGraph::default());
    let summary = builder(&graph, RegistrationMode::Awaited)
        .run(&[])
        .await
        .unwrap();

    assert_eq!(summary.entities_created, 0);
    assert_eq!(graph.component_type_calls(), 1);
    assert!(graph.entities().is_empty());
}

#[tokio::test]
async fn test_detached_registration_still_runs_once() {
    let graph = Arc::new(RecordingGraph::default());
    builder(&graph, RegistrationMode::Detached)
        .run(&sample_records())
        .await
        .unwrap();

    assert_eq!(graph.component_type_calls(), 1);
    assert_eq!(graph.entities().len(), 3);
}

#[tokio::test]
async fn test_failure_stops_remaining_records() {
    let graph = Arc::new(RecordingGraph::failing_on("building1"));
    let err = builder(&graph, RegistrationMode::Awaited)
        .run(&sample_records())
        .await
        .unwrap_err();

    match err {
        BuildError::Remote {
            operation, index, ..
        } => {
            assert_eq!(operation, Operation::CreateEntity);
            assert_eq!(index, Some(1));
        }
        other => panic!("unexpected error: {other}"),
    }

    // sensor1 is never attempted.
    let names: Vec<String> = graph.entities().into_iter().map(|e| e.entity_name).collect();
    assert_eq!(names, vec!["site1", "building1"]);
}

#[tokio::test]
async fn test_registration_failure_aborts_before_records() {
    let graph = Arc::new(RecordingGraph {
        fail_component_type: true,
        ..Default::default()
    });
    let err = builder(&graph, RegistrationMode::Awaited)
        .run(&sample_records())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BuildError::Remote {
            operation: Operation::DefineRelationshipType,
            index: None,
            ..
        }
    ));
    assert!(graph.entities().is_empty());
}

#[tokio::test]
async fn test_detached_registration_failure_surfaces_after_loop() {
    let graph = Arc::new(RecordingGraph {
        fail_component_type: true,
        ..Default::default()
    });
    let err = builder(&graph, RegistrationMode::Detached)
        .run(&sample_records())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BuildError::Remote {
            operation: Operation::DefineRelationshipType,
            ..
        }
    ));
    assert_eq!(graph.entities().len(), 3);
}

#[tokio::test]
async fn test_near_miss_type_is_custom_relationship() {
    let graph = Arc::new(RecordingGraph::default());
    let records = vec![
        Record::new("site1", None, None),
        Record::new("building1", Some("site1"), Some("IsChildOf")),
    ];
    builder(&graph, RegistrationMode::Awaited)
        .run(&records)
        .await
        .unwrap();

    let building = &graph.entities()[1];
    assert!(building.parent_entity_id.is_none());
    assert!(building.entity_id.is_none());
    assert!(building.components[RELATIONSHIP_COMPONENT]
        .properties
        .contains_key("IsChildOf"));
}
