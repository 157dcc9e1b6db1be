//! 提交存储操作
//!
//! 提交映射以 (assignment_id, student_id) 为键，唯一性在此强制：
//! 并发的首次提交会竞争同一个 entry，落败方走覆盖路径（后写者胜），不会产生重复记录。

use dashmap::mapref::entry::Entry;

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::{
    PaginationInfo,
    grades::requests::GradeWrite,
    submissions::{
        entities::Submission,
        requests::{SubmissionListQuery, SubmissionWrite},
        responses::SubmissionListResponse,
    },
};

impl MemoryStorage {
    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(
        &self,
        submission_id: i64,
    ) -> Result<Option<Submission>> {
        let Some(pair) = self.submission_ids.get(&submission_id).map(|p| *p.value()) else {
            return Ok(None);
        };
        Ok(self.submissions.get(&pair).map(|s| s.value().clone()))
    }

    /// 获取 (作业, 学生) 对的唯一提交
    pub async fn get_submission_by_pair_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        Ok(self
            .submissions
            .get(&(assignment_id, student_id))
            .map(|s| s.value().clone()))
    }

    /// 插入或覆盖 (作业, 学生) 对的提交
    ///
    /// 覆盖时保留记录 ID，递增 attempt，并无条件清空评分字段。
    pub async fn upsert_submission_impl(
        &self,
        record: SubmissionWrite,
    ) -> Result<(Submission, bool)> {
        let key = (record.assignment_id, record.student_id);
        match self.submissions.entry(key) {
            Entry::Occupied(mut entry) => {
                let submission = entry.get_mut();
                submission.content = record.content;
                submission.attachments = record.attachments;
                submission.submitted_at = record.submitted_at;
                submission.is_late = record.is_late;
                submission.attempt += 1;
                submission.score = None;
                submission.feedback = None;
                submission.graded_at = None;
                submission.graded_by = None;
                Ok((submission.clone(), true))
            }
            Entry::Vacant(entry) => {
                let submission = Submission {
                    id: self.alloc_id(),
                    assignment_id: record.assignment_id,
                    student_id: record.student_id,
                    content: record.content,
                    attachments: record.attachments,
                    attempt: 1,
                    submitted_at: record.submitted_at,
                    is_late: record.is_late,
                    score: None,
                    feedback: None,
                    graded_at: None,
                    graded_by: None,
                };
                self.submission_ids.insert(submission.id, key);
                entry.insert(submission.clone());
                Ok((submission, false))
            }
        }
    }

    /// 写入评分字段
    pub async fn apply_grade_impl(
        &self,
        submission_id: i64,
        grade: GradeWrite,
    ) -> Result<Option<Submission>> {
        let Some(pair) = self.submission_ids.get(&submission_id).map(|p| *p.value()) else {
            return Ok(None);
        };
        let Some(mut submission) = self.submissions.get_mut(&pair) else {
            return Ok(None);
        };
        submission.score = Some(grade.score);
        submission.feedback = Some(grade.feedback);
        submission.graded_at = Some(grade.graded_at);
        submission.graded_by = Some(grade.graded_by);
        Ok(Some(submission.value().clone()))
    }

    /// 某作业的全部提交
    pub async fn list_submissions_by_assignment_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Submission>> {
        let mut submissions: Vec<Submission> = self
            .submissions
            .iter()
            .filter(|s| s.key().0 == assignment_id)
            .map(|s| s.value().clone())
            .collect();
        submissions.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at).then(a.id.cmp(&b.id)));
        Ok(submissions)
    }

    /// 某学生的全部提交
    pub async fn list_submissions_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<Submission>> {
        let mut submissions: Vec<Submission> = self
            .submissions
            .iter()
            .filter(|s| s.key().1 == student_id)
            .map(|s| s.value().clone())
            .collect();
        submissions.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at).then(a.id.cmp(&b.id)));
        Ok(submissions)
    }

    /// 列出提交（分页）
    pub async fn list_submissions_with_pagination_impl(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        let page = query.page.unwrap_or(1).max(1);
        let size = query.size.unwrap_or(10).clamp(1, 100);

        let all: Vec<Submission> = self
            .list_submissions_by_assignment_impl(query.assignment_id)
            .await?
            .into_iter()
            .filter(|s| query.student_id.is_none_or(|sid| s.student_id == sid))
            .collect();

        let total = all.len() as i64;
        let total_pages = (total as u64).div_ceil(size as u64) as i64;
        let items = all
            .into_iter()
            .skip(((page - 1) * size) as usize)
            .take(size as usize)
            .collect();

        Ok(SubmissionListResponse {
            items,
            pagination: PaginationInfo {
                page,
                page_size: size,
                total,
                total_pages,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn write(assignment_id: i64, student_id: i64, content: &str) -> SubmissionWrite {
        SubmissionWrite {
            assignment_id,
            student_id,
            content: Some(content.to_string()),
            attachments: vec![],
            submitted_at: Utc::now(),
            is_late: false,
        }
    }

    #[tokio::test]
    async fn test_upsert_keeps_one_record_per_pair() {
        let storage = MemoryStorage::new();
        let (first, resubmitted) = storage.upsert_submission_impl(write(1, 2, "v1")).await.unwrap();
        assert!(!resubmitted);

        let (second, resubmitted) = storage.upsert_submission_impl(write(1, 2, "v2")).await.unwrap();
        assert!(resubmitted);
        assert_eq!(second.id, first.id);
        assert_eq!(second.attempt, 2);

        let all = storage.list_submissions_by_assignment_impl(1).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].content.as_deref(), Some("v2"));
    }

    #[tokio::test]
    async fn test_resubmission_clears_grade_fields() {
        let storage = MemoryStorage::new();
        let (submission, _) = storage.upsert_submission_impl(write(1, 2, "v1")).await.unwrap();
        storage
            .apply_grade_impl(
                submission.id,
                GradeWrite {
                    score: 90.0,
                    feedback: "不错".to_string(),
                    graded_at: Utc::now(),
                    graded_by: 7,
                },
            )
            .await
            .unwrap()
            .unwrap();

        let (resubmitted, replaced) = storage.upsert_submission_impl(write(1, 2, "v2")).await.unwrap();
        assert!(replaced);
        assert!(resubmitted.score.is_none());
        assert!(resubmitted.feedback.is_none());
        assert!(resubmitted.graded_at.is_none());
        assert!(resubmitted.graded_by.is_none());
    }
}
