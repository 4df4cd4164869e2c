//! BoundedList interface step definitions.

use std::collections::HashMap;

use boundlist::{BoundedList, MAX_CAPACITY};
use cucumber::{given, then, when, World};

const RECORD: usize = std::mem::size_of::<i32>();

/// Test context for BoundedList scenarios.
///
/// Lists are kept as owned copies so the world does not borrow from itself.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct BoundedListWorld {
    lists: HashMap<String, BoundedList<'static>>,
    last_error: Option<String>,
}

impl BoundedListWorld {
    fn new() -> Self {
        Self {
            lists: HashMap::new(),
            last_error: None,
        }
    }

    fn list(&self, name: &str) -> &BoundedList<'static> {
        self.lists
            .get(name)
            .unwrap_or_else(|| panic!("list {} not defined", name))
    }

    fn take(&mut self, name: &str) -> BoundedList<'static> {
        self.lists
            .remove(name)
            .unwrap_or_else(|| panic!("list {} not defined", name))
    }

    fn record(&mut self, result: boundlist::Result<()>) {
        self.last_error = result.err().map(|e| e.to_string());
    }
}

/// Build a list owning copies of `values`.
fn owned_list(values: &[i32], capacity: usize) -> BoundedList<'static> {
    let mut buffers: Vec<[u8; RECORD]> = values.iter().map(|v| v.to_ne_bytes()).collect();
    let mut source = BoundedList::with_capacity(buffers.len().max(1)).expect("non-zero capacity");
    for buffer in buffers.iter_mut() {
        source.append(buffer);
    }

    let mut list = BoundedList::with_capacity(capacity).expect("non-zero capacity");
    list.copy(&source, RECORD).expect("records are RECORD bytes");
    list
}

fn parse_values(csv: &str) -> Vec<i32> {
    csv.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| v.parse().expect("integer record"))
        .collect()
}

fn decode(list: &BoundedList<'_>) -> Vec<i32> {
    list.iter()
        .map(|r| i32::from_ne_bytes(r[..RECORD].try_into().expect("short record")))
        .collect()
}

// --- Given steps ---

#[given(regex = r"^list (\w+) holds \[([-\d, ]*)\]$")]
fn given_list_holds(world: &mut BoundedListWorld, name: String, csv: String) {
    let list = owned_list(&parse_values(&csv), MAX_CAPACITY);
    world.lists.insert(name, list);
}

#[given(regex = r"^list (\w+) with capacity (\d+) holds \[([-\d, ]*)\]$")]
fn given_list_with_capacity_holds(
    world: &mut BoundedListWorld,
    name: String,
    capacity: usize,
    csv: String,
) {
    let list = owned_list(&parse_values(&csv), capacity);
    world.lists.insert(name, list);
}

#[given(regex = r"^list (\w+) holds (\d+) zero records$")]
fn given_list_holds_zeros(world: &mut BoundedListWorld, name: String, count: usize) {
    let list = owned_list(&vec![0; count], MAX_CAPACITY);
    world.lists.insert(name, list);
}

#[given(regex = r"^list (\w+) holds max capacity minus (\d+) zero records$")]
fn given_list_holds_near_capacity(world: &mut BoundedListWorld, name: String, short_by: usize) {
    let list = owned_list(&vec![0; MAX_CAPACITY - short_by], MAX_CAPACITY);
    world.lists.insert(name, list);
}

// --- When steps ---

#[when(regex = r"^I cross list (\w+) at (\d+) with list (\w+) at (\d+)$")]
fn when_cross(world: &mut BoundedListWorld, name_a: String, pos_a: usize, name_b: String, pos_b: usize) {
    let mut list_a = world.take(&name_a);
    let mut list_b = world.take(&name_b);
    let result = list_a.cross(pos_a, &mut list_b, pos_b);
    world.lists.insert(name_a, list_a);
    world.lists.insert(name_b, list_b);
    world.record(result);
}

#[when(regex = r"^I copy list (\w+) into list (\w+)$")]
fn when_copy(world: &mut BoundedListWorld, src: String, dst: String) {
    let mut target = world.lists.remove(&dst).unwrap_or_default();
    let result = target.copy(world.list(&src), RECORD);
    world.lists.insert(dst, target);
    world.record(result);
}

#[when(regex = r"^I copy list (\w+) from position (\d+) into list (\w+)$")]
fn when_sublist_copy(world: &mut BoundedListWorld, src: String, position: usize, dst: String) {
    let mut target = world.lists.remove(&dst).unwrap_or_default();
    let result = target.sublist_copy(world.list(&src), position, RECORD);
    world.lists.insert(dst, target);
    world.record(result);
}

#[when(regex = r"^I overwrite record (\d+) of list (\w+) with (-?\d+)$")]
fn when_overwrite(world: &mut BoundedListWorld, position: usize, name: String, value: i32) {
    let list = world
        .lists
        .get_mut(&name)
        .unwrap_or_else(|| panic!("list {} not defined", name));
    list.data_handle_get_mut(position)
        .expect("list is not empty")
        .copy_from_slice(&value.to_ne_bytes());
}

// --- Then steps ---

#[then(regex = r"^list (\w+) should hold \[([-\d, ]*)\]$")]
fn then_list_holds(world: &mut BoundedListWorld, name: String, csv: String) {
    assert_eq!(decode(world.list(&name)), parse_values(&csv));
}

#[then(regex = r"^list (\w+) should have size (\d+)$")]
fn then_list_size(world: &mut BoundedListWorld, name: String, size: usize) {
    let list = world.list(&name);
    assert_eq!(list.size_get(), size);
    assert_eq!(list.iter().count(), size);
}

#[then(regex = r"^list (\w+) should have max capacity size$")]
fn then_list_at_capacity(world: &mut BoundedListWorld, name: String) {
    then_list_size(world, name, MAX_CAPACITY);
}

#[then(regex = r"^record (\d+) of list (\w+) should be (-?\d+)$")]
fn then_record(world: &mut BoundedListWorld, position: usize, name: String, value: i32) {
    let record = world
        .list(&name)
        .data_handle_get(position)
        .expect("list is not empty");
    assert_eq!(record, &value.to_ne_bytes()[..]);
}

#[then(regex = r"^lists (\w+) and (\w+) should compare equal$")]
fn then_equal(world: &mut BoundedListWorld, a: String, b: String) {
    assert!(world.list(&a).compare(world.list(&b), RECORD));
}

#[then(regex = r"^lists (\w+) and (\w+) should not compare equal$")]
fn then_not_equal(world: &mut BoundedListWorld, a: String, b: String) {
    assert!(!world.list(&a).compare(world.list(&b), RECORD));
}

#[then(regex = r#"^the operation should fail with "(.*)"$"#)]
fn then_fails_with(world: &mut BoundedListWorld, message: String) {
    let error = world.last_error.as_deref().expect("operation succeeded");
    assert!(
        error.contains(&message),
        "expected error containing {:?}, got {:?}",
        message,
        error
    );
}

#[then("the operation should succeed")]
fn then_succeeds(world: &mut BoundedListWorld) {
    assert_eq!(world.last_error, None);
}
