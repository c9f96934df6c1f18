//! Demonstration driver: valid registrations, contract-violating
//! registrations, and the three publish outcomes (handled, handler failure,
//! unhandled).

use typebus::{ContractError, Dispatcher, DynHandler, Message, Shape};

#[derive(Debug)]
struct Greeting {
    text: String,
}
impl Message for Greeting {}

#[derive(Debug)]
struct Tick {
    count: u32,
}
impl Message for Tick {}

#[derive(Debug)]
struct Stray {
    id: u64,
}
impl Message for Stray {}

#[derive(Debug, thiserror::Error)]
#[error("tick {0} refused")]
struct TickRefused(u32);

#[derive(Debug, thiserror::Error)]
#[error("never happens")]
struct GreetingFailure;

fn handle_greeting(greeting: Greeting) -> Result<(), GreetingFailure> {
    println!("handle_greeting received {:?}", greeting.text);
    Ok(())
}

fn handle_tick(tick: Tick) -> Result<(), TickRefused> {
    println!("handle_tick received {}", tick.count);
    Err(TickRefused(tick.count))
}

fn report(result: Result<(), ContractError>) {
    match result {
        Ok(()) => println!("registered"),
        Err(err) => println!("Error: {err}"),
    }
}

fn main() {
    let mut bus = Dispatcher::new();

    bus.subscribe(handle_greeting);
    bus.subscribe(handle_tick);

    // Both rejected: wrong parameter shape, then no result at all. The
    // Greeting binding above survives untouched.
    report(bus.subscribe_dyn(
        Shape::of::<Greeting>(),
        DynHandler::new(|_: Tick| -> Result<(), TickRefused> { Ok(()) }),
    ));
    report(bus.subscribe_dyn(
        Shape::of::<Greeting>(),
        DynHandler::without_result(|_: Greeting| {}),
    ));

    let outcomes = [
        bus.publish(Greeting {
            text: "foobar".to_string(),
        }),
        bus.publish(Tick { count: 99 }),
        bus.publish(Stray { id: 191919 }),
    ];
    for outcome in outcomes {
        match outcome {
            Ok(()) => println!("published"),
            Err(err) => println!("Error: {err}"),
        }
    }
}
