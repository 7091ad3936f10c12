use necb_autozone::AutozoneError;
use necb_autozone::classify::ActivityTier;
use necb_autozone::collab::{
    BuilderCall, RecordingBuilder, StandardsTable, StaticGeometry, StoredSizingLoads,
    ThermostatSet,
};
use necb_autozone::hvac::SystemTemplate;
use necb_autozone::model::{
    AdjacencyEdge, AdjacencyGraph, HorizontalPlacement, ScheduleLetter, ThermalZone,
    VerticalPlacement,
};
use necb_autozone::{
    Autozone, AutozoneContext, AutozoneOptions, AutozoneReport, BuildingModel, ReferenceData,
    Space, SpaceType, SystemNumber,
};

struct FixtureSpace {
    name: &'static str,
    story: &'static str,
    space_type: &'static str,
    area: f64,
    horizontal: HorizontalPlacement,
}

const OFFICE_SPACES: &[FixtureSpace] = &[
    FixtureSpace {
        name: "L1 Office North",
        story: "Level 1",
        space_type: "Office - enclosed",
        area: 100.0,
        horizontal: HorizontalPlacement::North,
    },
    FixtureSpace {
        name: "L1 Office South",
        story: "Level 1",
        space_type: "Office - open plan",
        area: 120.0,
        horizontal: HorizontalPlacement::South,
    },
    FixtureSpace {
        name: "L1 Corridor",
        story: "Level 1",
        space_type: "Corr. >= 2.4m wide",
        area: 40.0,
        horizontal: HorizontalPlacement::Core,
    },
    FixtureSpace {
        name: "L1 Server",
        story: "Level 1",
        space_type: "Computer/Server room",
        area: 20.0,
        horizontal: HorizontalPlacement::Core,
    },
    FixtureSpace {
        name: "L1 Plenum",
        story: "Level 1",
        space_type: "- undefined -",
        area: 300.0,
        horizontal: HorizontalPlacement::Core,
    },
    FixtureSpace {
        name: "L2 Office",
        story: "Level 2",
        space_type: "Office - enclosed",
        area: 200.0,
        horizontal: HorizontalPlacement::North,
    },
    FixtureSpace {
        name: "L2 Stair",
        story: "Level 2",
        space_type: "Stairway",
        area: 10.0,
        horizontal: HorizontalPlacement::Core,
    },
];

fn space_type_name(standards_space_type: &str) -> String {
    format!("Space Function {standards_space_type}")
}

/// Collaborators of a small two-story office.
struct Fixture {
    reference: ReferenceData,
    standards: StandardsTable,
    geometry: StaticGeometry,
    loads: StoredSizingLoads,
    thermostats: ThermostatSet,
}

impl Fixture {
    fn office(server_cooling_w_per_m2: f64) -> Self {
        let graph = AdjacencyGraph::from_edges(&[
            AdjacencyEdge::new("L1 Corridor", "L1 Office South", 30.0, true),
            AdjacencyEdge::new("L1 Corridor", "L1 Office North", 20.0, true),
            AdjacencyEdge::new("L1 Corridor", "L1 Server", 10.0, true),
            AdjacencyEdge::new("L2 Stair", "L2 Office", 8.0, true),
            AdjacencyEdge::new("L2 Stair", "L1 Corridor", 40.0, false),
        ]);
        let mut geometry = StaticGeometry::new(graph);
        for space in OFFICE_SPACES {
            let vertical = if space.story == "Level 1" {
                VerticalPlacement::Ground
            } else {
                VerticalPlacement::Top
            };
            geometry = geometry.with_space(space.name, space.area, space.horizontal, vertical);
        }
        let names: Vec<String> = OFFICE_SPACES
            .iter()
            .map(|s| space_type_name(s.space_type))
            .collect();
        Self {
            reference: ReferenceData::necb().unwrap(),
            standards: StandardsTable::necb2011().unwrap(),
            geometry,
            loads: StoredSizingLoads::new()
                .with_space("L1 Office North", 40.0, 60.0)
                .with_space("L1 Server", 10.0, server_cooling_w_per_m2),
            thermostats: ThermostatSet::for_space_types(names.iter().map(String::as_str)),
        }
    }

    fn autozone(&self) -> Autozone<'_> {
        Autozone::new(AutozoneContext::new(
            &self.reference,
            &self.standards,
            &self.standards,
            &self.geometry,
            &self.loads,
            &self.thermostats,
        ))
    }
}

fn office_model(stories: u32) -> BuildingModel {
    let mut model = BuildingModel::new("Small office")
        .with_standards_building_type("Office")
        .with_above_ground_stories(stories);
    model.add_story("Level 1").unwrap();
    model.add_story("Level 2").unwrap();
    for space in OFFICE_SPACES {
        let type_name = space_type_name(space.space_type);
        let space_type = SpaceType::new(&type_name, space.space_type, "Office");
        model
            .add_space(Space::new(space.name, space.story, Some(space_type)))
            .unwrap();
    }
    model
}

fn run_office(
    fixture: &Fixture,
    model: &mut BuildingModel,
    options: &AutozoneOptions,
) -> (Result<AutozoneReport, AutozoneError>, RecordingBuilder) {
    let mut builder = RecordingBuilder::new();
    let result = fixture.autozone().run(model, &mut builder, options);
    (result, builder)
}

fn gas() -> AutozoneOptions {
    AutozoneOptions::with_fuel_preset("NaturalGas").unwrap()
}

fn system_of(report: &AutozoneReport, space: &str) -> Option<u8> {
    report
        .trace
        .iter()
        .find(|t| t.space == space)
        .and_then(|t| t.system_number)
}

#[test]
fn test_every_counted_space_is_zoned() {
    let fixture = Fixture::office(1500.0);
    let mut model = office_model(2);
    let (result, _) = run_office(&fixture, &mut model, &gas());
    let report = result.unwrap();

    for trace in report.trace.iter() {
        assert!(trace.system_number.is_some(), "{} has no system", trace.space);
        if trace.standards_space_type == "- undefined -" {
            assert_eq!(trace.system_number, Some(0));
            assert!(trace.thermal_zone.is_none());
        } else {
            assert!(trace.thermal_zone.is_some(), "{} has no zone", trace.space);
        }
    }
    assert!(model.unzoned_spaces().is_empty());
    assert_eq!(model.thermal_zones().len(), 6);
    assert!(model.space("L1 Plenum").unwrap().thermal_zone.is_none());
}

#[test]
fn test_building_activity_and_schedules() {
    let fixture = Fixture::office(1500.0);
    let mut model = office_model(2);
    let report = run_office(&fixture, &mut model, &gas()).0.unwrap();

    assert_eq!(report.building_activity.key, "office");
    assert_eq!(report.building_activity.tier, ActivityTier::StatedType);
    // Raw letters in first-seen order: "L1 Corridor" sorts first.
    assert_eq!(
        report.schedule_letters,
        vec![ScheduleLetter::Wildcard, ScheduleLetter::A]
    );
}

#[test]
fn test_building_activity_is_idempotent() {
    let fixture = Fixture::office(1500.0);
    let first = run_office(&fixture, &mut office_model(2), &gas()).0.unwrap();
    let second = run_office(&fixture, &mut office_model(2), &gas()).0.unwrap();
    assert_eq!(first.building_activity, second.building_activity);
    assert_eq!(first.trace, second.trace);
}

#[test]
fn test_wildcard_takes_largest_same_floor_neighbour() {
    let fixture = Fixture::office(1500.0);
    let mut model = office_model(2);
    let report = run_office(&fixture, &mut model, &gas()).0.unwrap();

    let corridor = report
        .trace
        .iter()
        .find(|t| t.space == "L1 Corridor")
        .unwrap();
    assert_eq!(corridor.system_number, Some(3));
    assert_eq!(corridor.resolved_from.as_deref(), Some("L1 Office South"));
    assert_eq!(corridor.schedule_letter, Some(ScheduleLetter::A));
    assert_eq!(
        corridor.thermal_zone.as_deref(),
        Some("Sp-L1 Corridor Sys-3 Flr-1 Sch-A HPlcmt-core ZN")
    );

    // The stair prefers its small same-floor neighbour over the larger
    // corridor below.
    let stair = report.trace.iter().find(|t| t.space == "L2 Stair").unwrap();
    assert_eq!(stair.resolved_from.as_deref(), Some("L2 Office"));
}

#[test]
fn test_data_processing_follows_cooling_load() {
    let fixture = Fixture::office(1250.0);
    let report = run_office(&fixture, &mut office_model(2), &gas()).0.unwrap();
    // 1250 W/m² × 20 m² = 25 kW
    assert_eq!(system_of(&report, "L1 Server"), Some(2));

    let fixture = Fixture::office(500.0);
    let report = run_office(&fixture, &mut office_model(2), &gas()).0.unwrap();
    // 10 kW
    assert_eq!(system_of(&report, "L1 Server"), Some(1));
}

#[test]
fn test_story_count_drives_general_area_system() {
    let fixture = Fixture::office(0.0);
    let report = run_office(&fixture, &mut office_model(2), &gas()).0.unwrap();
    assert_eq!(system_of(&report, "L2 Office"), Some(3));

    let report = run_office(&fixture, &mut office_model(6), &gas()).0.unwrap();
    assert_eq!(system_of(&report, "L2 Office"), Some(6));
    assert_eq!(system_of(&report, "L2 Stair"), Some(6));
}

#[test]
fn test_hot_water_loop_and_bindings() {
    let fixture = Fixture::office(1500.0);
    let mut model = office_model(2);
    let (result, builder) = run_office(&fixture, &mut model, &gas());
    result.unwrap();

    assert_eq!(
        builder.calls[0],
        BuilderCall::HotWaterLoop("Hot Water Loop".to_string())
    );
    assert_eq!(
        builder.built_systems(),
        vec![SystemNumber::new(2).unwrap(), SystemNumber::new(3).unwrap()]
    );
    let hw_loop = model.hot_water_loop().unwrap();
    assert_eq!(hw_loop.boiler_fuel.as_str(), "NaturalGas");

    let bindings = model.system_bindings();
    assert_eq!(bindings.len(), 2);
    let sys3 = &bindings[1];
    assert!(matches!(sys3.template, SystemTemplate::PackagedRooftop { .. }));
    assert_eq!(sys3.zones.len(), 5);
    assert!(
        sys3.zone_names
            .contains(&"Sp-L2 Office Sys-3 Flr-2 Sch-A HPlcmt-north ZN".to_string())
    );
}

#[test]
fn test_ideal_loads_mode() {
    let fixture = Fixture::office(1500.0);
    let mut model = office_model(2);
    let options = gas().with_ideal_loads(true);
    let (result, builder) = run_office(&fixture, &mut model, &options);
    result.unwrap();

    assert!(builder.built_systems().is_empty());
    assert_eq!(builder.calls.len(), 6);
    assert!(model.hot_water_loop().is_none());
    assert!(model.thermal_zones().iter().all(|z| z.ideal_loads));
}

#[test]
fn test_multipliers_apply_to_zones() {
    let fixture = Fixture::office(1500.0);
    let mut model = office_model(2);
    let options = gas().with_space_multiplier("L2 Office", 3);
    run_office(&fixture, &mut model, &options).0.unwrap();

    let zone = model
        .thermal_zone_by_name("Sp-L2 Office Sys-3 Flr-2 Sch-A HPlcmt-north ZN")
        .unwrap();
    assert_eq!(zone.multiplier, 3);
    assert_eq!(
        zone.thermostat.as_ref().unwrap().name,
        "Space Function Office - enclosed Thermostat"
    );
}

#[test]
fn test_invalid_configuration_leaves_model_untouched() {
    let fixture = Fixture::office(1500.0);
    let mut model = office_model(2);
    let sizing = model
        .add_thermal_zone(ThermalZone::new("sizing", SystemNumber::UNCONDITIONED))
        .unwrap();

    let mut options = gas();
    options.fuel.fan_type = "propeller".to_string();
    let (result, builder) = run_office(&fixture, &mut model, &options);

    assert!(matches!(
        result,
        Err(AutozoneError::Validation { ref parameter, .. }) if parameter == "fan_type"
    ));
    assert!(builder.calls.is_empty());
    assert!(model.thermal_zone(&sizing).is_some());
}

#[test]
fn test_missing_story_count_is_rejected() {
    let fixture = Fixture::office(1500.0);
    let mut model = office_model(2);
    model.above_ground_stories = None;
    let (result, _) = run_office(&fixture, &mut model, &gas());
    assert!(matches!(result, Err(AutozoneError::Validation { .. })));
}

#[test]
fn test_missing_thermostat_aborts() {
    let mut fixture = Fixture::office(1500.0);
    fixture.thermostats = ThermostatSet::for_space_types(["Space Function Office - enclosed"]);
    let (result, _) = run_office(&fixture, &mut office_model(2), &gas());
    assert!(matches!(
        result,
        Err(AutozoneError::ThermostatMissing { .. })
    ));
}

#[test]
fn test_undefined_only_building_passes() {
    let fixture = Fixture::office(0.0);
    let mut model = BuildingModel::new("Shell")
        .with_standards_building_type("Office")
        .with_above_ground_stories(1);
    model.add_story("Level 1").unwrap();
    let undefined = SpaceType::new("Space Function - undefined -", "- undefined -", "Office");
    model
        .add_space(Space::new("L1 Plenum", "Level 1", Some(undefined)))
        .unwrap();

    let (result, builder) = run_office(&fixture, &mut model, &gas());
    let report = result.unwrap();
    assert!(model.thermal_zones().is_empty());
    assert!(builder.calls.is_empty());
    assert_eq!(report.trace.len(), 1);
}

#[test]
fn test_unzoned_counted_space_fails_post_condition() {
    let fixture = Fixture::office(0.0);
    let mut model = BuildingModel::new("Shell")
        .with_standards_building_type("Office")
        .with_above_ground_stories(1);
    model.add_story("Level 1").unwrap();
    let undefined = SpaceType::new("Space Function - undefined -", "- undefined -", "Office");
    model
        .add_space(Space::new("L1 Plenum", "Level 1", Some(undefined)))
        .unwrap();
    assert!(necb_autozone::hvac::check_zone_assignment(&model).is_ok());

    let office = SpaceType::new("Space Function Office - enclosed", "Office - enclosed", "Office");
    model
        .add_space(Space::new("L1 Office North", "Level 1", Some(office)))
        .unwrap();
    assert_eq!(
        necb_autozone::hvac::check_zone_assignment(&model),
        Err(AutozoneError::PostCondition {
            spaces: vec!["L1 Office North".to_string()]
        })
    );
}

#[test]
fn test_report_serializes_to_json() {
    let fixture = Fixture::office(1500.0);
    let report = run_office(&fixture, &mut office_model(2), &gas()).0.unwrap();
    let json = report.to_json().unwrap();
    assert!(json.contains("\"resolved_from\": \"L1 Office South\""));
    assert!(json.contains("\"tier\": \"stated_type\""));
    let parsed: AutozoneReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.building_activity.key, report.building_activity.key);
    assert_eq!(parsed.schedule_letters, report.schedule_letters);
    assert_eq!(parsed.trace.len(), report.trace.len());
}

#[test]
fn test_space_without_geometry_is_rejected() {
    let fixture = Fixture::office(1500.0);
    let mut model = office_model(2);
    let office = SpaceType::new("Space Function Office - enclosed", "Office - enclosed", "Office");
    model
        .add_space(Space::new("L2 Closet", "Level 2", Some(office)))
        .unwrap();
    let (result, builder) = run_office(&fixture, &mut model, &gas());
    assert!(matches!(
        result,
        Err(AutozoneError::InvalidModel(ref msg)) if msg.contains("L2 Closet")
    ));
    assert!(builder.calls.is_empty());
}
