use recast::{Mapper, Record};

#[derive(Debug, Default, Record)]
struct Ticket {
    code: i32,
}

#[derive(Debug, Default, Record)]
struct TicketDto {
    code: String,
}

#[test]
#[should_panic(expected = "cannot assign `Ticket.code`")]
fn unassignable_pairing_panics() {
    let _ = Mapper::new().map::<Ticket, TicketDto>(&Ticket { code: 42 });
}
