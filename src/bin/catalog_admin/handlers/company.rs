#![deny(clippy::all, clippy::pedantic)]

use catalog_admin::application::company::CompanyInfoManager;
use catalog_admin::application::error::AppError;
use catalog_admin::domain::forms::CompanyInfoForm;

use super::assign;
use crate::args::{CompanyCmd, CompanyFields};
use crate::client::{CliError, Ctx};
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: CompanyCmd) -> Result<(), CliError> {
    ctx.require_session()?;
    let mut company = CompanyInfoManager::new(ctx.api.clone(), ctx.notifier.clone());
    match cmd {
        CompanyCmd::Show => {
            let info = company.load().await?;
            print_json(info)
        }
        CompanyCmd::Update(fields) => {
            company.load().await?;
            let form = company.form_mut().ok_or(AppError::NoOpenForm)?;
            apply_fields(form, fields);
            company.save().await?;
            Ok(())
        }
    }
}

pub(crate) fn apply_fields(form: &mut CompanyInfoForm, fields: CompanyFields) {
    let CompanyFields {
        about_uz,
        about_ru,
        history_uz,
        history_ru,
        mission_uz,
        mission_ru,
        vision_uz,
        vision_ru,
        phone,
        email,
        telegram,
        address_uz,
        address_ru,
        latitude,
        longitude,
        employees_count,
        established_year,
    } = fields;

    assign(&mut form.about_uz, about_uz);
    assign(&mut form.about_ru, about_ru);
    assign(&mut form.history_uz, history_uz);
    assign(&mut form.history_ru, history_ru);
    assign(&mut form.mission_uz, mission_uz);
    assign(&mut form.mission_ru, mission_ru);
    assign(&mut form.vision_uz, vision_uz);
    assign(&mut form.vision_ru, vision_ru);
    assign(&mut form.phone, phone);
    assign(&mut form.email, email);
    assign(&mut form.telegram, telegram);
    assign(&mut form.address_uz, address_uz);
    assign(&mut form.address_ru, address_ru);
    assign(&mut form.latitude, latitude);
    assign(&mut form.longitude, longitude);
    assign(&mut form.employees_count, employees_count);
    assign(&mut form.established_year, established_year);
}
