use recast::Record;

#[derive(Default, Record)]
pub struct Profile {
    #[map_access(read_only)]
    pub created_at: u64,

    #[map_access(write_only)]
    pub password: String,

    #[map_from("login")]
    #[map_ignore]
    pub username: String,
}

fn main() {
    let shape = Profile::shape();

    assert!(!shape.field("created_at").unwrap().writable);
    assert!(!shape.field("password").unwrap().readable);

    let username = shape.field("username").unwrap();
    assert_eq!(username.map_from.as_deref(), Some("login"));
    assert!(username.ignored);
}
