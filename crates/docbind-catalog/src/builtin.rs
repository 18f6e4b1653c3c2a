//! Field catalogs compiled into the binary.

use crate::field::{DocumentKindCatalog, FieldDescriptor, ScalarType};
use crate::tables::{ArrayTableConfig, TableColumn};

fn s(key: &str, label: &str) -> FieldDescriptor {
    FieldDescriptor::string(key, label)
}

fn n(key: &str, label: &str) -> FieldDescriptor {
    FieldDescriptor::number(key, label)
}

fn d(key: &str, label: &str) -> FieldDescriptor {
    FieldDescriptor::date(key, label)
}

fn items(columns: Vec<FieldDescriptor>) -> FieldDescriptor {
    FieldDescriptor::array("items", "明细列表", columns)
}

fn material_columns(extra: Vec<FieldDescriptor>) -> Vec<FieldDescriptor> {
    let mut cols = vec![s("material_code", "物料编码"), s("material_name", "物料名称")];
    cols.extend(extra);
    cols
}

pub(crate) fn common() -> DocumentKindCatalog {
    DocumentKindCatalog::new(
        "common",
        "通用",
        vec![
            s("company_name", "公司名称"),
            s("print_user", "打印人"),
            d("print_time", "打印时间"),
            s("tenant_name", "组织名称"),
        ],
    )
}

pub(crate) fn kinds() -> Vec<DocumentKindCatalog> {
    vec![
        DocumentKindCatalog::new(
            "work_order",
            "工单",
            vec![
                s("code", "工单编号"),
                s("work_order_qrcode", "工单二维码"),
                FieldDescriptor::scalar("signature", "签名", ScalarType::Signature),
                s("name", "工单名称"),
                s("product_code", "产品编码"),
                s("product_name", "产品名称"),
                n("quantity", "生产数量"),
                s("status", "状态"),
                s("production_mode", "生产模式"),
                s("workshop_name", "车间名称"),
                s("work_center_name", "工作中心名称"),
                d("planned_start_date", "计划开始时间"),
                d("planned_end_date", "计划结束时间"),
                s("priority", "优先级"),
                s("remarks", "备注"),
                s("created_by_name", "创建人"),
                d("created_at", "创建时间"),
                FieldDescriptor::array(
                    "operations",
                    "工序列表",
                    vec![
                        n("sequence", "工序顺序"),
                        s("operation_code", "工序编码"),
                        s("operation_name", "工序名称"),
                        s("status", "工序状态"),
                        s("work_center_name", "工作中心"),
                    ],
                ),
            ],
        )
        .with_print_code("WORK_ORDER_PRINT"),
        DocumentKindCatalog::new(
            "material",
            "物料",
            vec![
                s("code", "物料编码"),
                s("name", "物料名称"),
                s("spec", "规格型号"),
                s("unit", "单位"),
                s("category", "分类"),
            ],
        )
        .with_print_code("MATERIAL_PRINT"),
        DocumentKindCatalog::new(
            "production_picking",
            "生产领料单",
            vec![
                s("code", "领料单号"),
                s("work_order_code", "工单编号"),
                s("workshop_name", "车间名称"),
                s("status", "状态"),
                s("picker_name", "领料人"),
                d("picking_time", "领料时间"),
                d("created_at", "创建时间"),
            ],
        )
        .with_print_code("PRODUCTION_PICKING_PRINT"),
        DocumentKindCatalog::new(
            "production_return",
            "生产退料单",
            vec![
                s("code", "退料单号"),
                s("work_order_code", "工单编号"),
                s("picking_code", "领料单号"),
                s("workshop_name", "车间名称"),
                s("warehouse_name", "仓库名称"),
                s("status", "状态"),
                s("returner_name", "退料人"),
                d("return_time", "退料时间"),
                d("created_at", "创建时间"),
            ],
        )
        .with_print_code("PRODUCTION_RETURN_PRINT"),
        DocumentKindCatalog::new(
            "other_inbound",
            "其他入库单",
            vec![
                s("code", "入库单号"),
                s("reason_type", "原因类型"),
                s("reason_desc", "原因说明"),
                s("warehouse_name", "仓库名称"),
                n("total_quantity", "总数量"),
                n("total_amount", "总金额"),
                s("status", "状态"),
                s("receiver_name", "入库人"),
                d("receipt_time", "入库时间"),
                s("notes", "备注"),
                d("created_at", "创建时间"),
                items(material_columns(vec![
                    n("inbound_quantity", "入库数量"),
                    n("unit_price", "单价"),
                    n("total_amount", "金额"),
                ])),
            ],
        )
        .with_print_code("OTHER_INBOUND_PRINT"),
        DocumentKindCatalog::new(
            "other_outbound",
            "其他出库单",
            vec![
                s("code", "出库单号"),
                s("reason_type", "原因类型"),
                s("reason_desc", "原因说明"),
                s("warehouse_name", "仓库名称"),
                n("total_quantity", "总数量"),
                n("total_amount", "总金额"),
                s("status", "状态"),
                s("deliverer_name", "出库人"),
                d("delivery_time", "出库时间"),
                s("notes", "备注"),
                d("created_at", "创建时间"),
                items(material_columns(vec![
                    n("outbound_quantity", "出库数量"),
                    n("unit_price", "单价"),
                    n("total_amount", "金额"),
                ])),
            ],
        )
        .with_print_code("OTHER_OUTBOUND_PRINT"),
        DocumentKindCatalog::new(
            "quotation",
            "报价单",
            vec![
                s("code", "报价单号"),
                s("customer_name", "客户名称"),
                s("customer_contact", "客户联系人"),
                s("customer_phone", "客户电话"),
                d("quotation_date", "报价日期"),
                d("valid_until", "有效期至"),
                d("delivery_date", "预计交货日期"),
                n("total_quantity", "总数量"),
                n("total_amount", "总金额"),
                s("status", "状态"),
                s("salesman_name", "销售员"),
                s("shipping_address", "收货地址"),
                s("shipping_method", "发货方式"),
                s("payment_terms", "付款条件"),
                s("notes", "备注"),
                d("created_at", "创建时间"),
                items(material_columns(vec![
                    n("quote_quantity", "报价数量"),
                    n("unit_price", "单价"),
                    n("total_amount", "金额"),
                ])),
            ],
        )
        .with_print_code("QUOTATION_PRINT"),
        DocumentKindCatalog::new(
            "material_borrow",
            "借料单",
            vec![
                s("borrow_code", "借料单号"),
                s("warehouse_name", "仓库名称"),
                s("borrower_name", "借料人"),
                s("department", "部门"),
                d("expected_return_date", "预计归还日期"),
                s("status", "状态"),
                d("borrow_time", "借出时间"),
                n("total_quantity", "总数量"),
                s("notes", "备注"),
                d("created_at", "创建时间"),
                items(material_columns(vec![
                    n("borrow_quantity", "借出数量"),
                    n("returned_quantity", "已归还数量"),
                ])),
            ],
        )
        .with_print_code("MATERIAL_BORROW_PRINT"),
        DocumentKindCatalog::new(
            "material_return",
            "还料单",
            vec![
                s("return_code", "还料单号"),
                s("borrow_code", "借料单号"),
                s("warehouse_name", "仓库名称"),
                s("returner_name", "归还人"),
                s("status", "状态"),
                d("return_time", "归还时间"),
                n("total_quantity", "总数量"),
                s("notes", "备注"),
                d("created_at", "创建时间"),
                items(material_columns(vec![n("return_quantity", "归还数量")])),
            ],
        )
        .with_print_code("MATERIAL_RETURN_PRINT"),
        DocumentKindCatalog::new(
            "finished_goods_receipt",
            "成品入库单",
            vec![
                s("code", "入库单号"),
                s("work_order_code", "工单编号"),
                s("warehouse_name", "仓库名称"),
                n("total_quantity", "总数量"),
                s("status", "状态"),
                s("receiver_name", "收货人"),
                d("receipt_time", "入库时间"),
                d("created_at", "创建时间"),
            ],
        )
        .with_print_code("FINISHED_GOODS_RECEIPT_PRINT"),
        DocumentKindCatalog::new(
            "sales_delivery",
            "销售出库单",
            vec![
                s("code", "出库单号"),
                s("sales_order_code", "销售订单号"),
                s("customer_name", "客户名称"),
                s("warehouse_name", "仓库名称"),
                n("total_quantity", "总数量"),
                n("total_amount", "总金额"),
                s("status", "状态"),
                s("deliverer_name", "发货人"),
                d("delivery_time", "发货时间"),
                d("created_at", "创建时间"),
            ],
        )
        .with_print_code("SALES_DELIVERY_PRINT"),
        DocumentKindCatalog::new(
            "purchase_order",
            "采购订单",
            vec![
                s("code", "订单号"),
                s("order_name", "订单名称"),
                s("supplier_name", "供应商名称"),
                d("order_date", "订单日期"),
                d("delivery_date", "交货日期"),
                n("total_amount", "总金额"),
                s("status", "状态"),
                d("created_at", "创建时间"),
            ],
        )
        .with_print_code("PURCHASE_ORDER_PRINT"),
        DocumentKindCatalog::new(
            "purchase_receipt",
            "采购入库单",
            vec![
                s("code", "入库单号"),
                s("purchase_order_code", "采购订单号"),
                s("supplier_name", "供应商名称"),
                s("warehouse_name", "仓库名称"),
                n("total_quantity", "总数量"),
                n("total_amount", "总金额"),
                s("status", "状态"),
                s("receiver_name", "收货人"),
                d("receipt_time", "入库时间"),
                d("created_at", "创建时间"),
            ],
        )
        .with_print_code("PURCHASE_RECEIPT_PRINT"),
        DocumentKindCatalog::new(
            "delivery_notice",
            "送货单",
            vec![
                s("code", "通知单号"),
                s("sales_delivery_code", "销售出库单号"),
                s("sales_order_code", "销售订单号"),
                s("customer_name", "客户名称"),
                s("customer_contact", "客户联系人"),
                s("customer_phone", "客户电话"),
                d("planned_delivery_date", "预计送达日期"),
                s("carrier", "承运商/物流方式"),
                s("tracking_number", "运单号"),
                s("shipping_address", "收货地址"),
                s("status", "状态"),
                d("sent_at", "发送时间"),
                n("total_quantity", "总数量"),
                n("total_amount", "总金额"),
                s("notes", "备注"),
                d("created_at", "创建时间"),
                items(material_columns(vec![
                    n("notice_quantity", "通知数量"),
                    n("unit_price", "单价"),
                ])),
            ],
        )
        .with_print_code("DELIVERY_NOTICE_PRINT"),
        DocumentKindCatalog::new(
            "sample_trial",
            "样品试用单",
            vec![
                s("code", "试用单号"),
                s("customer_name", "客户名称"),
                s("customer_contact", "客户联系人"),
                s("customer_phone", "客户电话"),
                s("trial_purpose", "试用目的"),
                d("trial_period_start", "试用开始日期"),
                d("trial_period_end", "试用结束日期"),
                s("sales_order_code", "关联销售订单号"),
                s("other_outbound_code", "关联其他出库单号"),
                s("status", "状态"),
                n("total_quantity", "总数量"),
                n("total_amount", "总金额"),
                s("notes", "备注"),
                d("created_at", "创建时间"),
                items(material_columns(vec![
                    n("trial_quantity", "试用数量"),
                    n("unit_price", "单价"),
                ])),
            ],
        )
        .with_print_code("SAMPLE_TRIAL_PRINT"),
        DocumentKindCatalog::new(
            "sales_order",
            "销售订单",
            vec![
                s("code", "订单号"),
                s("order_name", "订单名称"),
                s("customer_name", "客户名称"),
                d("order_date", "订单日期"),
                d("delivery_date", "交货日期"),
                n("total_quantity", "总数量"),
                n("total_amount", "总金额"),
                s("status", "状态"),
                d("created_at", "创建时间"),
            ],
        )
        .with_print_code("SALES_ORDER_PRINT"),
    ]
}

/// Hand-tuned table layouts that take precedence over the ones derived
/// from array fields.
pub(crate) fn tables() -> Vec<(&'static str, ArrayTableConfig)> {
    vec![(
        "work_order",
        ArrayTableConfig {
            array_key: "operations".to_string(),
            label: "工序列表".to_string(),
            max_rows: Some(10),
            columns: vec![
                TableColumn::new("sequence", "序号"),
                TableColumn::new("operation_code", "工序编码"),
                TableColumn::new("operation_name", "工序名称"),
                TableColumn::new("status", "工序状态"),
                TableColumn::new("work_center_name", "工作中心"),
            ],
        },
    )]
}
