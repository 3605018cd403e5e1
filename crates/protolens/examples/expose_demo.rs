//! Walks a small class-style hierarchy through every exposure view.
//!
//! Run with `RUST_LOG=info cargo run --example expose_demo` to also see the
//! stream adapter's verbose output.

use protolens::{
    expose, inspect, stream, Exposed, ExposeResult, Options, OutputMethod, PropObject, Symbol,
    Transform, Value,
};

fn main() -> ExposeResult<()> {
    env_logger::init();

    // user -> Account.prototype -> object root
    let mut account_proto = PropObject::plain();
    account_proto.set("kind", Value::str("Account"));

    let mut user = PropObject::with_parent(account_proto.into_ref());
    user.set("name", Value::str("ada"));
    user.define(
        Symbol::new("internal"),
        protolens::Descriptor::data(Value::Int(7)).enumerable(false),
    );
    let target = Value::object(user);

    let options = Options::default();
    println!("flatten:");
    println!(
        "{}",
        inspect(&Exposed::Keys(expose::flatten(&target, &options)), false)
    );

    println!("\narrays by level:");
    println!(
        "{}",
        inspect(
            &Exposed::Levels(expose::arrays_by_level(&target, &options)),
            false
        )
    );

    println!("\nnested mirror (values kept):");
    let mirror = expose::nested_mirror(&target, &options.clone().keep_values(true))?;
    println!("{}", inspect(&Exposed::Object(mirror), false));

    println!("\nenumerable copy through the stream adapter:");
    let mut adapter = stream(
        Options::default()
            .method(OutputMethod::Enumerate)
            .verbose(true),
    );
    let mirrored = adapter.transform(target)?;
    println!("{}", inspect(&mirrored, false));

    Ok(())
}
