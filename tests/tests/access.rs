use tests::models::*;

use pretty_assertions::assert_eq;
use recast::Mapper;

#[test]
fn write_only_source_field_is_never_read() {
    let source = Dog {
        id: 7,
        name: "Rex".to_string(),
        variety: "Beagle".to_string(),
        tags: vec![],
    };

    let target = Mapper::new().map::<Dog, DogDto>(&source).unwrap();

    assert_eq!(target.id, 0);
    assert_eq!(target.name, "Rex");
    assert_eq!(target.variety, "Beagle");
}

#[test]
fn read_only_target_field_is_never_written() {
    let source = DogDto {
        id: 7,
        name: "Rex".to_string(),
        variety: "Beagle".to_string(),
        tags: vec![],
    };

    let target = Mapper::new().map::<DogDto, Dog>(&source).unwrap();

    assert_eq!(target.id, 7);
    assert_eq!(target.name, "Rex");
    assert_eq!(target.variety, "");
}

#[test]
fn collections_are_not_mapped() {
    let source = Dog {
        tags: vec!["friendly".to_string(), "loud".to_string()],
        ..Default::default()
    };

    let mapper = Mapper::new();
    let target = mapper.map::<Dog, DogDto>(&source).unwrap();

    assert!(target.tags.is_empty());

    let plan = mapper.plan::<Dog, DogDto>().unwrap();
    assert_eq!(
        plan.names().collect::<Vec<_>>(),
        [("name", "name"), ("variety", "variety")]
    );
}
