use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Local};

use crate::services::range::EndDateControl;

/// Which picker the inline calendar is editing
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DatePickerTarget {
    StartDate,
    EndDate,
}

/// What the end picker currently shows and accepts
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EndPickerState {
    pub minimum_date: DateTime<Local>,
    pub date: DateTime<Local>,
}

/// End picker shared between the widget and the controller.
///
/// The controller writes through [`EndDateControl`]; the widget reads a
/// snapshot each frame and writes the user's own selections.
#[derive(Clone, Debug)]
pub struct SharedEndPicker(Rc<RefCell<EndPickerState>>);

impl SharedEndPicker {
    pub fn new(state: EndPickerState) -> Self {
        Self(Rc::new(RefCell::new(state)))
    }

    pub fn snapshot(&self) -> EndPickerState {
        *self.0.borrow()
    }

    pub fn show_date(&self, date: DateTime<Local>) {
        self.0.borrow_mut().date = date;
    }
}

impl EndDateControl for SharedEndPicker {
    fn set_minimum_date(&mut self, date: DateTime<Local>) {
        self.0.borrow_mut().minimum_date = date;
    }

    fn set_date(&mut self, date: DateTime<Local>) {
        self.show_date(date);
    }
}
