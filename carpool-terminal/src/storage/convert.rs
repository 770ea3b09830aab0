//! Conversion between document types and the domain model.

use std::collections::BTreeSet;

use tracing::debug;

use crate::domain::{
    Address, Driver, DriverAssignment, Name, Passenger, Phone, Pool, Tag, TripDay, TripTime,
};
use crate::store::AddressBook;

use super::error::StorageError;
use super::types::{AddressBookDto, DriverDto, PassengerDto, PoolDto};

impl From<&Driver> for DriverDto {
    fn from(driver: &Driver) -> Self {
        DriverDto {
            name: driver.name().to_string(),
            phone: driver.phone().to_string(),
        }
    }
}

impl From<&Passenger> for PassengerDto {
    fn from(passenger: &Passenger) -> Self {
        PassengerDto {
            name: passenger.name().to_string(),
            phone: passenger.phone().to_string(),
            address: passenger.address().to_string(),
            trip_day: passenger.trip_day().as_str().to_string(),
            trip_time: passenger.trip_time().to_hhmm(),
            tags: tag_strings(passenger.tags()),
            driver: passenger.driver().driver().map(DriverDto::from),
        }
    }
}

impl From<&Pool> for PoolDto {
    fn from(pool: &Pool) -> Self {
        PoolDto {
            driver: DriverDto::from(pool.driver()),
            trip_day: pool.trip_day().as_str().to_string(),
            trip_time: pool.trip_time().to_hhmm(),
            passengers: pool.passengers().iter().map(PassengerDto::from).collect(),
            tags: tag_strings(pool.tags()),
        }
    }
}

impl From<&AddressBook> for AddressBookDto {
    fn from(book: &AddressBook) -> Self {
        AddressBookDto {
            passengers: book.passengers().iter().map(PassengerDto::from).collect(),
            pools: book.pools().iter().map(PoolDto::from).collect(),
        }
    }
}

fn tag_strings(tags: &BTreeSet<Tag>) -> Vec<String> {
    tags.iter().map(|t| t.as_str().to_string()).collect()
}

fn parse_tags(tags: &[String]) -> Result<BTreeSet<Tag>, StorageError> {
    Ok(tags
        .iter()
        .map(|t| Tag::parse(t))
        .collect::<Result<_, _>>()?)
}

fn convert_driver(dto: &DriverDto) -> Result<Driver, StorageError> {
    Ok(Driver::new(Name::parse(&dto.name)?, Phone::parse(&dto.phone)?))
}

fn convert_passenger(dto: &PassengerDto) -> Result<Passenger, StorageError> {
    let driver = dto.driver.as_ref().map(convert_driver).transpose()?;

    Ok(Passenger::new(
        Name::parse(&dto.name)?,
        Phone::parse(&dto.phone)?,
        Address::parse(&dto.address)?,
        TripDay::parse(&dto.trip_day)?,
        TripTime::parse_hhmm(&dto.trip_time)?,
        parse_tags(&dto.tags)?,
    )
    .with_driver(DriverAssignment::from(driver)))
}

/// Builds a pool, binding each embedded passenger to the matching entry of
/// `loaded`.
fn convert_pool(dto: &PoolDto, loaded: &[Passenger]) -> Result<Pool, StorageError> {
    let embedded = dto
        .passengers
        .iter()
        .map(convert_passenger)
        .collect::<Result<Vec<_>, _>>()?;

    let pool = Pool::new(
        convert_driver(&dto.driver)?,
        TripDay::parse(&dto.trip_day)?,
        TripTime::parse_hhmm(&dto.trip_time)?,
        embedded,
        parse_tags(&dto.tags)?,
    )?;

    let members = pool
        .passengers()
        .iter()
        .map(|member| {
            loaded
                .iter()
                .find(|p| *p == member)
                .cloned()
                .ok_or_else(|| StorageError::Format {
                    message: format!(
                        "pool driven by {} refers to unknown passenger {}",
                        dto.driver.name,
                        member.name()
                    ),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(pool.with_passengers(members)?)
}

/// Rebuild an address book from its document.
///
/// Passengers are loaded first; pools are then resolved against them.
pub fn convert_address_book(dto: &AddressBookDto) -> Result<AddressBook, StorageError> {
    let mut book = AddressBook::new();

    for passenger in &dto.passengers {
        book.add_passenger(convert_passenger(passenger)?)?;
    }

    for pool in &dto.pools {
        let pool = convert_pool(pool, book.passengers())?;
        book.add_pool(pool)?;
    }

    debug!(
        passengers = book.passengers().len(),
        pools = book.pools().len(),
        "converted address book"
    );
    Ok(book)
}
