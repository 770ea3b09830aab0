//! Typical passengers, drivers and pools shared by unit tests.

use std::collections::BTreeSet;

use crate::domain::{
    Address, Driver, DriverAssignment, Name, Passenger, Phone, Pool, Tag, TripDay, TripTime,
};
use crate::commands::{Command, CommandError, CommandErrorKind};
use crate::store::{AddressBook, Model};

fn tag_set(tags: &[&str]) -> BTreeSet<Tag> {
    tags.iter().map(|t| Tag::parse(t).unwrap()).collect()
}

/// Fluent construction of passengers in tests.
#[derive(Debug, Clone)]
pub struct PassengerBuilder {
    name: String,
    phone: String,
    address: String,
    trip_day: String,
    trip_time: String,
    tags: Vec<String>,
    driver: DriverAssignment,
}

impl PassengerBuilder {
    pub fn new() -> Self {
        Self {
            name: "Amy Bee".to_string(),
            phone: "85355255".to_string(),
            address: "123, Jurong West Ave 6, #08-111".to_string(),
            trip_day: "monday".to_string(),
            trip_time: "1930".to_string(),
            tags: vec![],
            driver: DriverAssignment::Unassigned,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    pub fn trip_day(mut self, day: &str) -> Self {
        self.trip_day = day.to_string();
        self
    }

    pub fn trip_time(mut self, hhmm: &str) -> Self {
        self.trip_time = hhmm.to_string();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn driver(mut self, driver: Driver) -> Self {
        self.driver = DriverAssignment::Assigned(driver);
        self
    }

    pub fn build(self) -> Passenger {
        let tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        Passenger::new(
            Name::parse(&self.name).unwrap(),
            Phone::parse(&self.phone).unwrap(),
            Address::parse(&self.address).unwrap(),
            TripDay::parse(&self.trip_day).unwrap(),
            TripTime::parse_hhmm(&self.trip_time).unwrap(),
            tag_set(&tags),
        )
        .with_driver(self.driver)
    }
}

impl From<&Passenger> for PassengerBuilder {
    fn from(p: &Passenger) -> Self {
        Self {
            name: p.name().to_string(),
            phone: p.phone().to_string(),
            address: p.address().to_string(),
            trip_day: p.trip_day().to_string(),
            trip_time: p.trip_time().to_hhmm(),
            tags: p.tags().iter().map(|t| t.as_str().to_string()).collect(),
            driver: p.driver().clone(),
        }
    }
}

/// Fluent construction of pools in tests. Skips the trip-day check the
/// pool command performs.
#[derive(Debug, Clone)]
pub struct PoolBuilder {
    driver: Driver,
    trip_day: String,
    trip_time: String,
    passengers: Vec<Passenger>,
    tags: Vec<String>,
}

impl PoolBuilder {
    pub fn new() -> Self {
        Self {
            driver: driver_fiona(),
            trip_day: "monday".to_string(),
            trip_time: "1930".to_string(),
            passengers: vec![alice()],
            tags: vec![],
        }
    }

    pub fn driver(mut self, driver: Driver) -> Self {
        self.driver = driver;
        self
    }

    pub fn trip_day(mut self, day: &str) -> Self {
        self.trip_day = day.to_string();
        self
    }

    pub fn trip_time(mut self, hhmm: &str) -> Self {
        self.trip_time = hhmm.to_string();
        self
    }

    pub fn passengers(mut self, passengers: Vec<Passenger>) -> Self {
        self.passengers = passengers;
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn build(self) -> Pool {
        let tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        Pool::new(
            self.driver,
            TripDay::parse(&self.trip_day).unwrap(),
            TripTime::parse_hhmm(&self.trip_time).unwrap(),
            self.passengers,
            tag_set(&tags),
        )
        .unwrap()
    }
}

impl From<&Pool> for PoolBuilder {
    fn from(pool: &Pool) -> Self {
        Self {
            driver: pool.driver().clone(),
            trip_day: pool.trip_day().to_string(),
            trip_time: pool.trip_time().to_hhmm(),
            passengers: pool.passengers().to_vec(),
            tags: pool.tags().iter().map(|t| t.as_str().to_string()).collect(),
        }
    }
}

pub fn driver_fiona() -> Driver {
    Driver::new(
        Name::parse("Fiona Kunz").unwrap(),
        Phone::parse("9482427").unwrap(),
    )
}

pub fn driver_bob() -> Driver {
    Driver::new(
        Name::parse("Bob Choo").unwrap(),
        Phone::parse("22222222").unwrap(),
    )
}

pub fn alice() -> Passenger {
    PassengerBuilder::new()
        .name("Alice Pauline")
        .phone("94351253")
        .address("123, Jurong West Ave 6, #08-111")
        .trip_day("monday")
        .trip_time("1930")
        .tags(&["friends"])
        .build()
}

pub fn bob() -> Passenger {
    PassengerBuilder::new()
        .name("Benson Meier")
        .phone("98765432")
        .address("311, Clementi Ave 2, #02-25")
        .trip_day("monday")
        .trip_time("1945")
        .tags(&["owesMoney", "friends"])
        .build()
}

/// Monday passenger 30 minutes after the usual 19:30 pickup.
pub fn carl() -> Passenger {
    PassengerBuilder::new()
        .name("Carl Kurz")
        .phone("95352563")
        .address("wall street")
        .trip_day("monday")
        .trip_time("2000")
        .build()
}

pub fn daniel() -> Passenger {
    PassengerBuilder::new()
        .name("Daniel Meier")
        .phone("87652533")
        .address("10th street")
        .trip_day("tuesday")
        .trip_time("0800")
        .tags(&["friends"])
        .build()
}

pub fn elle() -> Passenger {
    PassengerBuilder::new()
        .name("Elle Meyer")
        .phone("9482224")
        .address("michegan ave")
        .trip_day("tuesday")
        .trip_time("0815")
        .build()
}

pub fn george() -> Passenger {
    PassengerBuilder::new()
        .name("George Best")
        .phone("9482442")
        .address("4th street")
        .trip_day("wednesday")
        .trip_time("1200")
        .build()
}

pub fn typical_passengers() -> Vec<Passenger> {
    vec![alice(), bob(), carl(), daniel(), elle(), george()]
}

/// Fiona's Monday 19:30 pool with Alice and Benson.
pub fn home_pool() -> Pool {
    PoolBuilder::new()
        .driver(driver_fiona())
        .trip_day("monday")
        .trip_time("1930")
        .passengers(vec![alice(), bob()])
        .build()
}

/// Bob's Tuesday 08:00 pool with Daniel and Elle.
pub fn office_pool() -> Pool {
    PoolBuilder::new()
        .driver(driver_bob())
        .trip_day("tuesday")
        .trip_time("0800")
        .passengers(vec![daniel(), elle()])
        .tags(&["office"])
        .build()
}

/// Every typical passenger plus the home and office pools.
pub fn typical_address_book() -> AddressBook {
    let mut book = AddressBook::new();
    for passenger in typical_passengers() {
        book.add_passenger(passenger).unwrap();
    }
    book.add_pool(home_pool()).unwrap();
    book.add_pool(office_pool()).unwrap();
    book
}

/// Every typical passenger and no pools.
pub fn address_book_without_pools() -> AddressBook {
    let mut book = AddressBook::new();
    for passenger in typical_passengers() {
        book.add_passenger(passenger).unwrap();
    }
    book
}

/// Runs `command`, asserting it fails with `kind` and leaves the store as it was.
pub fn assert_command_failure(
    command: &dyn Command,
    model: &mut Model,
    kind: CommandErrorKind,
) -> CommandError {
    let before = model.address_book().clone();
    let err = command.execute(model).unwrap_err();
    assert_eq!(err.kind(), kind, "unexpected failure: {}", err);
    assert_eq!(model.address_book(), &before);
    err
}
