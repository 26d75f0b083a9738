use proxy_fn::{callable, wrap, Async, Callable, Method, Options};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

struct Adder {
    label: String,
    calls: Cell<usize>,
}

#[callable]
impl Adder {
    #[call]
    fn add(&self, a: i32, b: i32) -> i32 {
        self.calls.set(self.calls.get() + 1);
        a + b
    }
}

fn adder(label: &str) -> Adder {
    Adder {
        label: label.to_owned(),
        calls: Cell::new(0),
    }
}

#[test]
fn callable_structs_are_callable() {
    let target = adder("plain");
    assert_eq!(target.call((1, 2)), 3);
    assert_eq!(target.calls.get(), 1);
}

#[test]
fn fields_are_visible_through_the_proxy() {
    let proxy = wrap(adder("x")).configure(
        Options::new()
            .from(|x: i32| (x, x))
            .to(|sum: i32| sum * 2),
    );
    assert_eq!(proxy.call((3,)), 12);
    assert_eq!(proxy.label, "x");
    assert_eq!(proxy.calls.get(), 1);
}

#[test]
fn fields_are_read_on_every_access() {
    let mut proxy = wrap(adder("x")).build();
    assert_eq!(proxy.label, "x");
    proxy.label = "y".to_owned();
    assert_eq!(proxy.label, "y");
    assert_eq!(proxy.target().label, "y");
}

struct Greeter {
    greeting: Rc<RefCell<String>>,
}

#[callable]
impl Greeter {
    #[call]
    fn greet(&self, name: &str) -> String {
        format!("{}, {name}", self.greeting.borrow())
    }
}

#[test]
fn shared_fields_stay_live() {
    let greeting = Rc::new(RefCell::new("hello".to_owned()));
    let proxy = wrap(Greeter {
        greeting: Rc::clone(&greeting),
    })
    .configure(Options::new().to(|line: String| line + "!"));
    assert_eq!(proxy.call(("ada",)), "hello, ada!");

    *greeting.borrow_mut() = "bye".to_owned();
    assert_eq!(*proxy.greeting.borrow(), "bye");
    assert_eq!(proxy.call(("ada",)), "bye, ada!");
}

struct Scaler {
    factor: i64,
}

struct Reading {
    value: i64,
}

#[callable]
impl Scaler {
    #[call(this)]
    fn scale(&self, this: &Reading, offset: i64) -> i64 {
        this.value * self.factor + offset
    }
}

#[tokio::test]
async fn callable_structs_take_receivers() {
    let proxy = wrap(Scaler { factor: 3 }).configure(Options::new().from(|offset: i64| {
        Async::new(async move { (offset * 10,) })
    }));
    let reading = Reading { value: 2 };
    assert_eq!(proxy.call_with(&reading, (1,)).await, 16);
    assert_eq!(proxy.factor, 3);
}

struct Names {
    names: Vec<String>,
}

#[callable]
impl Names {
    #[call]
    fn get(&self, index: usize) -> &str {
        &self.names[index]
    }
}

#[test]
fn borrowed_results() {
    let proxy = wrap(Names {
        names: vec!["ada".to_owned(), "grace".to_owned()],
    })
    .configure(Options::new().to(|name: &str| name.len()));
    assert_eq!(proxy.call((1,)), 5);
}
