use std::collections::HashSet;
use tess_connector::catalog::{describe_node, node_properties, resource_descriptor, RESOURCES};
use tess_connector::dispatcher::{operations_for, Resource, ROUTES};

#[test]
fn catalog_and_routing_table_agree_on_operations() {
    for descriptor in RESOURCES {
        let routed: HashSet<&str> = operations_for(descriptor.resource).into_iter().collect();
        let declared: HashSet<&str> = descriptor.operations.iter().map(|op| op.name).collect();
        assert_eq!(
            routed,
            declared,
            "catalog and routing table disagree for {}",
            descriptor.resource.as_str()
        );
    }
    let declared_total: usize = RESOURCES.iter().map(|d| d.operations.len()).sum();
    assert_eq!(declared_total, ROUTES.len());
}

#[test]
fn default_operation_exists_for_every_resource() {
    for resource in Resource::ALL {
        let descriptor = resource_descriptor(*resource);
        assert!(
            descriptor
                .operations
                .iter()
                .any(|op| op.name == descriptor.default_operation),
            "default operation of {} must be one of its operations",
            resource.as_str()
        );
    }
}

#[test]
fn every_required_routing_param_has_a_field_declaration() {
    let fields: HashSet<&str> = node_properties().iter().map(|p| p.name).collect();
    for route in ROUTES {
        for param in route.required {
            assert!(
                fields.contains(param),
                "required param {} of {}.{} missing from the field schema",
                param,
                route.resource.as_str(),
                route.operation
            );
        }
    }
}

#[test]
fn node_description_lists_all_resources_and_the_default_endpoint() {
    let description = describe_node();
    let resources = description
        .get("resources")
        .and_then(|v| v.as_array())
        .expect("resources array");
    assert_eq!(resources.len(), Resource::ALL.len());

    let endpoint_default = description
        .get("properties")
        .and_then(|v| v.as_array())
        .and_then(|props| {
            props
                .iter()
                .find(|p| p.get("name").and_then(|n| n.as_str()) == Some("apiEndpoint"))
        })
        .and_then(|p| p.get("default"))
        .and_then(|v| v.as_str())
        .expect("apiEndpoint property with default");
    assert_eq!(endpoint_default, "https://api.tess.pareto.io/api/v1");
}
