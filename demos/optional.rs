use std::collections::HashMap;

use optional::Optional;

fn lookup(table: &HashMap<&str, u32>, key: &str) -> Optional<u32> {
    Optional::of_nullable(table.get(key))
}

fn main() {
    #[cfg(feature = "logger")]
    env_logger::init();

    let table = HashMap::from([("one", 1), ("zero", 0)]);

    for key in ["one", "zero", "two"] {
        let res = lookup(&table, key);
        let (value, present) = res.get();
        println!(
            "lookup({key:?}) = {res} (get = ({value}, {present}), or_else = {})",
            res.or_else(u32::MAX)
        );
    }

    let a = Optional::of("hello");
    let b = Optional::<&str>::empty();
    println!("{a} == {b}: {}", a.equals(&b));
    println!("{a} == {a}: {}", a.equals(&a));
}
