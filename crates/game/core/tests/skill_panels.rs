use skirmish_core::{
    AssetError, AssetOracle, Entity, EntityError, EntityId, EntitySetup, Env, HeadlessLink,
    IconHandle, OracleError, Race, SkillCatalog, SkillCost, SkillDefinition, SkillError, SkillKind,
    SkillPanel,
};

struct TestAssets;

impl AssetOracle for TestAssets {
    fn resolve_icon(&self, race: Race, icon: &str) -> Result<IconHandle, AssetError> {
        Ok(IconHandle::new(0, format!("{}/{}", race.path(), icon)))
    }
}

const ORDERS: SkillPanel = SkillPanel(0);
const BUILD: SkillPanel = SkillPanel(1);

fn catalog() -> SkillCatalog {
    [
        SkillDefinition::new(SkillKind::Move, "Move", "move.png"),
        SkillDefinition::new(SkillKind::Stop, "Stop", "stop.png"),
        SkillDefinition::new(SkillKind::Attack, "Attack", "attack.png"),
        SkillDefinition::new(SkillKind::Extract, "Harvest", "harvest.png"),
        SkillDefinition::new(SkillKind::Cancel, "Cancel", "cancel.png"),
        SkillDefinition::new(SkillKind::BuildFarm, "Build Farm", "farm.png")
            .with_cost(SkillCost::new(500, 250)),
        SkillDefinition::new(SkillKind::BuildBarracks, "Build Barracks", "barracks.png")
            .with_cost(SkillCost::new(700, 450)),
    ]
    .into_iter()
    .collect()
}

fn peasant_setup() -> EntitySetup {
    EntitySetup::new("Peasant", Race::Human, 30, 4, "peasant.png")
        .with_skill(ORDERS, SkillKind::Move, 0)
        .with_skill(ORDERS, SkillKind::Attack, 2)
        .with_skill(ORDERS, SkillKind::Stop, 1)
        .with_skill(ORDERS, SkillKind::Extract, 3)
        .with_skill(BUILD, SkillKind::Cancel, 9)
        .with_skill(BUILD, SkillKind::BuildBarracks, 1)
        .with_skill(BUILD, SkillKind::BuildFarm, 0)
}

fn kinds<'a>(skills: impl Iterator<Item = &'a dyn skirmish_core::Skill>) -> Vec<SkillKind> {
    skills.map(|s| s.kind()).collect()
}

#[test]
fn spawn_grants_configured_skills_in_priority_order() {
    let catalog = catalog();
    let env = Env::with_all(&TestAssets, &catalog);
    let peasant =
        Entity::spawn(EntityId(5), &peasant_setup(), &env, Box::new(HeadlessLink::new())).unwrap();

    assert_eq!(
        kinds(peasant.skills_in(ORDERS)),
        vec![SkillKind::Move, SkillKind::Stop, SkillKind::Attack, SkillKind::Extract]
    );
    assert_eq!(
        kinds(peasant.skills_in(BUILD)),
        vec![SkillKind::BuildFarm, SkillKind::BuildBarracks, SkillKind::Cancel]
    );
    assert!(peasant.all_skills().all(|s| s.owner() == Some(EntityId(5))));
}

#[test]
fn all_skills_concatenates_panels_in_order() {
    let catalog = catalog();
    let env = Env::with_all(&TestAssets, &catalog);
    let peasant =
        Entity::spawn(EntityId(5), &peasant_setup(), &env, Box::new(HeadlessLink::new())).unwrap();

    let concatenated: Vec<SkillKind> = peasant
        .skills()
        .panels()
        .flat_map(|panel| kinds(peasant.skills_in(panel)))
        .collect();
    assert_eq!(kinds(peasant.all_skills()), concatenated);
}

#[test]
fn added_skill_is_found_until_removed() {
    let catalog = catalog();
    let env = Env::with_all(&TestAssets, &catalog);
    let setup = EntitySetup::new("Footman", Race::Human, 60, 4, "footman.png");
    let mut footman =
        Entity::spawn(EntityId(1), &setup, &env, Box::new(HeadlessLink::new())).unwrap();

    footman.add_skill(ORDERS, SkillKind::Attack, 0, &catalog).unwrap();
    let found = footman.skill(ORDERS, SkillKind::Attack).unwrap();
    assert_eq!(found.name(), "Attack");
    assert!(footman.skill(BUILD, SkillKind::Attack).is_none());

    let removed = footman.remove_skill(ORDERS, SkillKind::Attack);
    assert!(removed.is_some());
    assert!(footman.skill(ORDERS, SkillKind::Attack).is_none());
    assert!(footman.remove_skill(ORDERS, SkillKind::Attack).is_none());
}

#[test]
fn duplicate_assignment_replaces_previous_skill() {
    let catalog = catalog();
    let env = Env::with_all(&TestAssets, &catalog);
    let mut peasant =
        Entity::spawn(EntityId(5), &peasant_setup(), &env, Box::new(HeadlessLink::new())).unwrap();

    let replaced = peasant
        .add_skill(ORDERS, SkillKind::Move, 10, &catalog)
        .unwrap()
        .expect("move was already assigned");
    assert_eq!(replaced.priority(), 0);
    assert_eq!(peasant.skills().panel_len(ORDERS), 4);
    assert_eq!(
        kinds(peasant.skills_in(ORDERS)),
        vec![SkillKind::Stop, SkillKind::Attack, SkillKind::Extract, SkillKind::Move]
    );
}

#[test]
fn spawn_with_unknown_skill_builds_nothing() {
    let catalog = catalog();
    let env = Env::with_all(&TestAssets, &catalog);
    let setup = peasant_setup().with_skill(ORDERS, SkillKind::Repair, 4);

    let err = Entity::spawn(EntityId(5), &setup, &env, Box::new(HeadlessLink::new())).unwrap_err();
    assert_eq!(err, EntityError::Skill(SkillError::UnknownKind(SkillKind::Repair)));
}

#[test]
fn rejected_grant_keeps_existing_panels() {
    let catalog = catalog();
    let env = Env::with_all(&TestAssets, &catalog);
    let mut peasant =
        Entity::spawn(EntityId(5), &peasant_setup(), &env, Box::new(HeadlessLink::new())).unwrap();
    peasant.set_skill_panel(BUILD);
    peasant.set_skill_panel_next(ORDERS);

    let before = kinds(peasant.all_skills());
    assert_eq!(before.len(), 7);

    let err = peasant
        .add_skill(BUILD, SkillKind::Repair, 0, &catalog)
        .unwrap_err();
    assert_eq!(err, SkillError::UnknownKind(SkillKind::Repair));

    assert_eq!(kinds(peasant.all_skills()), before);
    assert_eq!(peasant.skill_panel(), BUILD);
    assert_eq!(peasant.skills().skill_panel_next(), ORDERS);
}

#[test]
fn spawn_requires_skill_factory_only_when_skills_are_listed() {
    let env = Env::new(Some(&TestAssets), None);

    let bare = EntitySetup::new("Farm", Race::Human, 400, 1, "farm.png");
    assert!(Entity::spawn(EntityId(7), &bare, &env, Box::new(HeadlessLink::new())).is_ok());

    let err = Entity::spawn(EntityId(8), &peasant_setup(), &env, Box::new(HeadlessLink::new()))
        .unwrap_err();
    assert_eq!(err, EntityError::Oracle(OracleError::SkillsNotAvailable));
}

#[test]
fn panel_cursor_pages_without_validation() {
    let catalog = catalog();
    let env = Env::with_all(&TestAssets, &catalog);
    let mut peasant =
        Entity::spawn(EntityId(5), &peasant_setup(), &env, Box::new(HeadlessLink::new())).unwrap();

    assert_eq!(peasant.skill_panel(), ORDERS);
    peasant.set_skill_panel_next(BUILD);
    peasant.skills_mut().advance_panel();
    assert_eq!(peasant.skill_panel(), BUILD);

    peasant.set_skill_panel(SkillPanel(42));
    assert_eq!(peasant.skills_in(peasant.skill_panel()).count(), 0);
}
