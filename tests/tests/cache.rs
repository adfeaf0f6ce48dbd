use tests::models::*;

use pretty_assertions::assert_eq;
use recast::schema::TypeKey;
use recast::Mapper;

use std::sync::Arc;
use std::thread;

#[test]
fn plans_are_resolved_once_per_pair() {
    tests::init_tracing();

    let mapper = Mapper::new();

    let first = mapper.plan::<MembershipType, MembershipTypeDto>().unwrap();
    mapper
        .map::<MembershipType, MembershipTypeDto>(&membership_type())
        .unwrap();
    let second = mapper.plan::<MembershipType, MembershipTypeDto>().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(mapper.cached_plans(), 1);
}

#[test]
fn nested_conversion_caches_the_nested_pair() {
    let mapper = Mapper::new();

    mapper.map::<User, UserDto>(&user()).unwrap();

    assert_eq!(
        mapper.cached_pairs(),
        [
            (TypeKey::of::<User>(), TypeKey::of::<UserDto>()),
            (
                TypeKey::of::<MembershipType>(),
                TypeKey::of::<MembershipTypeDto>()
            ),
        ]
    );
}

#[test]
fn plan_follows_declaration_order() {
    let plan = Mapper::new().plan::<User, UserDto>().unwrap();

    assert_eq!(
        plan.names().collect::<Vec<_>>(),
        [
            ("id", "id"),
            ("name", "name"),
            ("name", "full_name"),
            ("birth_date", "date_of_birth"),
            ("email", "workplace_email"),
            ("email", "email"),
            ("membership_type", "membership_type_dto"),
        ]
    );
}

#[test]
fn builder_resolves_registered_pairs() {
    let mapper = Mapper::builder()
        .register::<User, UserDto>()
        .register::<UserDto, User>()
        .build()
        .unwrap();

    assert_eq!(
        mapper.cached_pairs(),
        [
            (TypeKey::of::<User>(), TypeKey::of::<UserDto>()),
            (TypeKey::of::<UserDto>(), TypeKey::of::<User>()),
        ]
    );

    let registered = mapper.plan::<User, UserDto>().unwrap();
    mapper.map::<User, UserDto>(&user()).unwrap();

    assert!(Arc::ptr_eq(
        &registered,
        &mapper.plan::<User, UserDto>().unwrap()
    ));
}

#[test]
fn builder_can_build_more_than_once() {
    let mut builder = Mapper::builder();
    builder.register::<MembershipType, MembershipTypeDto>();

    let first = builder.build().unwrap();
    let second = builder.build().unwrap();

    assert_eq!(first.cached_plans(), 1);
    assert_eq!(second.cached_plans(), 1);
    assert!(!Arc::ptr_eq(
        &first.plan::<MembershipType, MembershipTypeDto>().unwrap(),
        &second.plan::<MembershipType, MembershipTypeDto>().unwrap()
    ));
}

#[test]
fn mapper_is_shared_across_threads() {
    fn assert_sync_send<T: Send + Sync>(_: &T) {}

    let mapper = Arc::new(Mapper::new());
    assert_sync_send(&mapper);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let mapper = mapper.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    let target = mapper.map::<User, UserDto>(&user()).unwrap();
                    assert_eq!(target.full_name, "Jane Smith");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(mapper.cached_plans(), 2);
}
