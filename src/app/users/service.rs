//! 年龄计算
//!
//! 年龄不落库，每次读取时根据出生日期和当天日期计算。

use chrono::{Datelike, Local, NaiveDate};

/// 以本地时区的今天为基准计算周岁
pub fn calculate_age(dob: NaiveDate) -> i32 {
    age_on(dob, Local::now().date_naive())
}

/// 以 `today` 为基准计算周岁：今年生日还没到就减一
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}
