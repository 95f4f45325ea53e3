use bashir_core::builder::ModuleBuilder;
use bashir_core::instructions::IntPredicate;
use bashir_core::types::Type;
use bashir_core::values::Value;
use bashir_emit::ScriptEmitter;

fn main() {
    let mut builder = ModuleBuilder::new();

    build_classify(&mut builder);
    build_main(&mut builder);

    let emitter = ScriptEmitter::new(builder.build());
    print!("{}", emitter.emit_to_string().unwrap());
}

/// Branches on the sign of a stored value; the negative side goes through
/// an intermediate block so the emitted script shows the jump chaining.
fn build_classify(builder: &mut ModuleBuilder) {
    let mut func = builder.function("classify");

    let negative = func.create_block("negative");
    let done = func.create_block("done");
    let positive = func.create_block("positive");

    let mut entry = func.entry_block();
    let slot = entry.alloca(Type::Int(32));
    let value = entry.load(slot);
    let is_negative = entry.icmp(IntPredicate::Slt, value, Value::int(0));
    entry.branch(is_negative, negative, positive);

    func.block(negative).unwrap().jump(done);
    func.block(done).unwrap().ret(Value::int(255));
    func.block(positive).unwrap().ret(Value::int(0));

    func.build().unwrap();
}

fn build_main(builder: &mut ModuleBuilder) {
    let mut func = builder.function("main");

    let mut entry = func.entry_block();
    let slot = entry.alloca(Type::Int(32));
    entry.store(slot.clone(), Value::int(6));
    let loaded = entry.load(slot);
    let product = entry.mul(loaded, Value::int(7));
    entry.call(Value::named("classify"), vec![]);
    entry.ret(product);

    func.build().unwrap();
}
