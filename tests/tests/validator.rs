use pretty_assertions::assert_eq;
use recast::schema::{Field, Ty, ValueKind};
use recast::{Mapper, Record, TypeValidator, Validator};

#[derive(Debug, Default, Clone, Record)]
struct Contact {
    email: String,
    phones: Vec<String>,
}

#[derive(Debug, Default, Clone, Record)]
struct ContactDto {
    #[map_from("Email")]
    address: String,
    phones: Vec<String>,
}

/// Matches overrides regardless of ASCII case.
struct IgnoreCase;

impl Validator for IgnoreCase {
    fn can_pair_by_override(&self, source: &Field, target: &Field) -> bool {
        let named = target
            .map_from
            .as_deref()
            .is_some_and(|name| name.eq_ignore_ascii_case(&source.name));

        named && (target.value_kind == ValueKind::Reference || target.ty.key == source.ty.key)
    }
}

/// Copies collections along with everything else.
#[derive(Clone)]
struct WithCollections;

impl Validator for WithCollections {
    fn is_mappable_kind(&self, _field: &Field) -> bool {
        true
    }
}

fn contact() -> Contact {
    Contact {
        email: "ada@example.com".to_string(),
        phones: vec!["555-0100".to_string()],
    }
}

#[test]
fn default_rules_match_overrides_exactly() {
    let target = Mapper::new().map::<Contact, ContactDto>(&contact()).unwrap();

    assert_eq!(target.address, "");
    assert!(target.phones.is_empty());
}

#[test]
fn custom_rule_replaces_only_what_it_overrides() {
    let mapper = Mapper::with_validator(IgnoreCase);

    let target = mapper.map::<Contact, ContactDto>(&contact()).unwrap();

    assert_eq!(target.address, "ada@example.com");
    assert!(target.phones.is_empty());
}

#[test]
fn builder_selects_the_validator() {
    let mapper = Mapper::builder()
        .validator(WithCollections)
        .register::<Contact, ContactDto>()
        .build()
        .unwrap();

    assert_eq!(mapper.cached_plans(), 1);

    let target = mapper.map::<Contact, ContactDto>(&contact()).unwrap();
    assert_eq!(target.phones, ["555-0100"]);
}

#[test]
fn borrowed_validator_behaves_like_the_owned_one() {
    let validator = TypeValidator;
    let mapper = Mapper::with_validator(&validator);

    let target = mapper.map::<Contact, ContactDto>(&contact()).unwrap();
    assert_eq!(target.address, "");
}

#[derive(Debug, Default, Record)]
struct Badge {
    label: String,
}

#[derive(Debug, Default, Record)]
struct BadgeDto {
    label: String,
}

/// Sends every pairing through nested conversion.
struct AlwaysConvert;

impl Validator for AlwaysConvert {
    fn requires_recursive_conversion(&self, _source: &Ty, _target: &Ty) -> bool {
        true
    }
}

#[test]
fn converting_a_non_record_reports_the_field() {
    let badge = Badge {
        label: "gold".to_string(),
    };

    let err = Mapper::with_validator(AlwaysConvert)
        .map::<Badge, BadgeDto>(&badge)
        .unwrap_err();

    assert!(err.is_invalid_argument());
    assert_eq!(
        err.to_string(),
        "invalid argument `label`: cannot convert from `label`: \
         invalid argument `source`: no shape was provided"
    );
}
