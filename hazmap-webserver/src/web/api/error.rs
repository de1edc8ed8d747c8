use anyhow::anyhow;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

use super::json_error_response;
use hazmap_application::error::{AppError, BError};
pub use hazmap_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                if let AppError::Business(err) = &err {
                    match err {
                        BError::Parameter(ref err) => {
                            return match *err {
                                ParameterError::Unauthorized => {
                                    json_error_response(req, err, Status::Unauthorized)
                                }
                                ParameterError::Forbidden => {
                                    json_error_response(req, err, Status::Forbidden)
                                }
                                ParameterError::AlreadyResolved => {
                                    json_error_response(req, err, Status::Conflict)
                                }
                                ParameterError::Repo(RepoError::NotFound) => {
                                    json_error_response(req, err, Status::NotFound)
                                }
                                ParameterError::Repo(RepoError::AlreadyExists) => {
                                    json_error_response(req, err, Status::Conflict)
                                }
                                _ => json_error_response(req, err, Status::BadRequest),
                            };
                        }
                        BError::Repo(RepoError::NotFound) => {
                            return json_error_response(req, err, Status::NotFound);
                        }
                        _ => {}
                    }
                }
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => json_error_response(req, &err, Status::InternalServerError),
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}
