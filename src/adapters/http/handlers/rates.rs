use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{
    DeleteRateToDoRequest, RatesInExamParams, RatesToDoParams, ResultResponse, SaveRateRequest,
  },
  errors::ApiError,
};
use crate::application::rates::{
  DeleteRateToDoCommand, DeleteRateToDoUseCase, FindRatesInExamQuery, FindRatesInExamUseCase,
  FindRatesToDoQuery, FindRatesToDoUseCase, SaveRateCommand, SaveRateUseCase,
};
use crate::domain::account::entities::RateList;

async fn save_rate(
  request: SaveRateRequest,
  list: RateList,
  use_case: &SaveRateUseCase,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  use_case
    .execute(SaveRateCommand {
      email: request.email,
      list,
      rate: request.rate,
    })
    .await?;

  Ok(HttpResponse::Ok().json(ResultResponse { result: true }))
}

/// POST /api/user/rates
pub async fn save_rates_handler(
  request: web::Json<SaveRateRequest>,
  use_case: web::Data<Arc<SaveRateUseCase>>,
) -> Result<HttpResponse, ApiError> {
  save_rate(request.into_inner(), RateList::Rates, &use_case).await
}

/// POST /api/user/rates/todo
pub async fn save_rates_to_do_handler(
  request: web::Json<SaveRateRequest>,
  use_case: web::Data<Arc<SaveRateUseCase>>,
) -> Result<HttpResponse, ApiError> {
  save_rate(request.into_inner(), RateList::RatesToDo, &use_case).await
}

/// GET /api/user/rates/exam?email=&userClass=&userClassOwnerEmail=&exam=
pub async fn find_rates_in_exam_handler(
  params: web::Query<RatesInExamParams>,
  use_case: web::Data<Arc<FindRatesInExamUseCase>>,
) -> Result<HttpResponse, ApiError> {
  params.validate()?;

  let params = params.into_inner();
  let rates = use_case
    .execute(FindRatesInExamQuery {
      email: params.email,
      user_class: params.user_class,
      user_class_owner_email: params.user_class_owner_email,
      exam: params.exam,
    })
    .await?;

  Ok(HttpResponse::Ok().json(rates))
}

/// GET /api/user/rates/todo?email=
pub async fn find_rates_to_do_handler(
  params: web::Query<RatesToDoParams>,
  use_case: web::Data<Arc<FindRatesToDoUseCase>>,
) -> Result<HttpResponse, ApiError> {
  params.validate()?;

  let rates = use_case
    .execute(FindRatesToDoQuery {
      email: params.into_inner().email,
    })
    .await?;

  Ok(HttpResponse::Ok().json(rates))
}

/// DELETE /api/user/rates/todo
pub async fn delete_rates_to_do_handler(
  request: web::Json<DeleteRateToDoRequest>,
  use_case: web::Data<Arc<DeleteRateToDoUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let request = request.into_inner();
  use_case
    .execute(DeleteRateToDoCommand {
      email: request.email,
      key: request.rate,
    })
    .await?;

  Ok(HttpResponse::Ok().json(ResultResponse { result: true }))
}
