//! Everything the page remembers between events, and the one function that
//! changes it.
//!
//! Components never touch fields directly: they dispatch an [`Action`] and
//! Yew's `use_reducer` runs [`UiState::apply`]. Anything that needs the clock
//! (today's date) is read by the caller and carried inside the action so the
//! transition itself stays pure.

use std::rc::Rc;

use yew::Reducible;

use crate::booking::{BookingError, BookingField, BookingRequest};
use crate::date::ServiceDate;
use crate::history::{LookupError, ServiceRecord};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LookupQuery {
    pub bike_identifier: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub lookup_open: bool,
    pub lookup: LookupQuery,
    pub records: Vec<ServiceRecord>,
    pub lookup_error: Option<LookupError>,

    pub booking_open: bool,
    pub booking: BookingRequest,
    /// Earliest selectable service date: the day the booking modal was opened.
    pub booking_earliest: ServiceDate,
    pub booking_error: Option<BookingError>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    OpenLookup,
    EditLookup(String),
    LookupResolved(Result<Vec<ServiceRecord>, LookupError>),
    CloseLookup,

    OpenBooking { today: ServiceDate },
    EditBooking(BookingField),
    BookingRejected(BookingError),
    BookingAccepted { today: ServiceDate },
    CloseBooking,
}

impl UiState {
    pub fn new(today: ServiceDate) -> Self {
        Self {
            lookup_open: false,
            lookup: LookupQuery::default(),
            records: Vec::new(),
            lookup_error: None,
            booking_open: false,
            booking: BookingRequest::new(today),
            booking_earliest: today,
            booking_error: None,
        }
    }

    pub fn apply(&self, action: Action) -> Self {
        let mut next = self.clone();
        match action {
            Action::OpenLookup => next.lookup_open = true,
            Action::EditLookup(v) => next.lookup.bike_identifier = v,
            Action::LookupResolved(Ok(records)) => {
                next.records = records;
                next.lookup_error = None;
            }
            Action::LookupResolved(Err(e)) => {
                next.records.clear();
                next.lookup_error = Some(e);
            }
            Action::CloseLookup => {
                next.lookup_open = false;
                next.lookup = LookupQuery::default();
                next.records.clear();
                next.lookup_error = None;
            }

            Action::OpenBooking { today } => {
                next.booking_open = true;
                next.booking_earliest = today;
                // fields survive a cancel, but a date kept from an earlier day can't
                if next.booking.service_date < today {
                    next.booking = next.booking.with(BookingField::ServiceDate(today));
                }
            }
            Action::EditBooking(BookingField::ServiceDate(d)) if d < self.booking_earliest => {}
            Action::EditBooking(field) => {
                next.booking = next.booking.with(field);
                next.booking_error = None;
            }
            Action::BookingRejected(e) => next.booking_error = Some(e),
            Action::BookingAccepted { today } => {
                next.booking = BookingRequest::new(today);
                next.booking_open = false;
                next.booking_error = None;
            }
            Action::CloseBooking => {
                next.booking_open = false;
                next.booking_error = None;
            }
        }
        next
    }
}

impl Reducible for UiState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}
